//! Hardware driver implementations
//!
//! Concrete implementations of the `scrollscope-display` traits, generic
//! over `embedded-hal` 1.0 buses:
//!
//! - Panels: ST7796S (SPI, 16-bit color)
//! - Touch: FT6336U and its FT62x6 siblings (I2C)
//!
//! The WT32-SC01 module pairs exactly these two controllers.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod ft6336;
pub mod st7796;

pub use ft6336::Ft6336;
pub use st7796::{St7796, St7796Config};
