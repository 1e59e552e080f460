//! Touch marker
//!
//! Paints a small square under the finger. The color cycles with the tick
//! counter. Markers are never erased explicitly; traces wipe them as they
//! scroll through.

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use scrollscope_display::{Batch, DisplayError, PixelDisplay, TouchPoint};

/// Default marker edge length in pixels
pub const DEFAULT_MARKER_SIZE: u16 = 5;

/// Filled square drawn at the touch point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchOverlay {
    size: u16,
}

impl Default for TouchOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_SIZE)
    }
}

impl TouchOverlay {
    /// Marker with edge `size`; even sizes extend one pixel further left/up
    pub const fn new(size: u16) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Marker color for a tick: `tick * 7` as a raw RGB565 value
    pub fn marker_color(tick: u32) -> Rgb565 {
        Rgb565::from(RawU16::new(tick.wrapping_mul(7) as u16))
    }

    /// Draw the marker centered on `point`, clipped to the panel
    pub fn draw<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        point: TouchPoint,
        tick: u32,
    ) -> Result<(), DisplayError> {
        let half = i32::from(self.size / 2);
        let left = (i32::from(point.x) - half).max(0);
        let top = (i32::from(point.y) - half).max(0);
        let right =
            (i32::from(point.x) - half + i32::from(self.size)).min(i32::from(display.width()));
        let bottom =
            (i32::from(point.y) - half + i32::from(self.size)).min(i32::from(display.height()));

        if right <= left || bottom <= top {
            return Ok(());
        }

        let mut batch = Batch::begin(display)?;
        batch.fill_rect(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
            Self::marker_color(tick),
        )?;
        batch.finish()
    }
}
