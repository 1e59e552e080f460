//! Board-agnostic core logic for the scrolling oscillograph
//!
//! This crate contains everything that does not depend on a specific panel
//! or touch controller:
//!
//! - Display geometry and the background grid classifier
//! - Per-series ring buffers and the two-sine sample generator
//! - Incremental column redraw (`WaveformScroller`)
//! - Touch marker overlay and status readouts
//! - Frame-rate measurement
//! - Configuration type definitions
//! - The per-frame orchestrator (`Scope`)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod scope;
pub mod telemetry;
pub mod waveform;

pub use config::ScopeConfig;
pub use error::ScopeError;
pub use geometry::Geometry;
pub use scope::{FrameReport, Scope};
pub use waveform::{WaveformScroller, SERIES_COUNT};

#[cfg(test)]
mod mock;
