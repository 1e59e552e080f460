//! Display and touch abstraction traits for scrollscope
//!
//! This crate provides:
//! - `PixelDisplay` trait for pixel-streaming panels (TFT, IPS)
//! - `TouchPanel` trait for touch controllers
//! - `Batch` scoped write transaction
//! - `Canvas` adapter so `embedded-graphics` drawables can target any panel
//!
//! # Architecture
//!
//! The waveform core only talks to these traits. Concrete panel and touch
//! drivers live in `scrollscope-drivers`; the firmware wires them to the
//! board's SPI/I2C peripherals.
//!
//! A frame is written as one transaction:
//!
//! ```text
//! begin_batch ─► set_window / write_run / write_pixel ... ─► end_batch
//! ```
//!
//! `Batch` guarantees `end_batch` runs even if a write fails midway, so the
//! bus never stays claimed after an error.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod batch;
pub mod canvas;
pub mod input;

// Re-export key types
pub use backend::{DisplayError, Orientation, PixelDisplay};
pub use batch::Batch;
pub use canvas::Canvas;
pub use embedded_graphics_core::pixelcolor::Rgb565;
pub use input::{TouchPanel, TouchPoint};

#[cfg(test)]
mod mock;
