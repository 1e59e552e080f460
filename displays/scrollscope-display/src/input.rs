//! Touch input trait

use crate::backend::{DisplayError, Orientation};

/// A touch contact in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Map a point reported in the controller's native (portrait) frame
    /// into the frame of a display rotated to `orientation`
    ///
    /// - `native_width`, `native_height`: panel size in portrait
    pub fn map_orientation(
        self,
        orientation: Orientation,
        native_width: u16,
        native_height: u16,
    ) -> Self {
        let max_x = native_width.saturating_sub(1);
        let max_y = native_height.saturating_sub(1);
        let x = self.x.min(max_x);
        let y = self.y.min(max_y);

        match orientation {
            Orientation::Portrait => Self::new(x, y),
            Orientation::Landscape => Self::new(y, max_x - x),
            Orientation::PortraitInverted => Self::new(max_x - x, max_y - y),
            Orientation::LandscapeInverted => Self::new(max_y - y, x),
        }
    }
}

/// Touch controller trait
pub trait TouchPanel {
    /// Sample the current contact point without blocking
    ///
    /// Returns `Ok(Some(point))` while touched, `Ok(None)` when not touched.
    /// Absence of a touch is not an error.
    fn poll_touch(&mut self) -> Result<Option<TouchPoint>, DisplayError>;
}
