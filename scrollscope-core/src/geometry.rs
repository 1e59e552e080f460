//! Display geometry
//!
//! Fixed offsets derived once from the panel size. The vertical offset
//! centers sample values; both offsets anchor the background grid.

use crate::error::ScopeError;

/// Widest panel the sample buffers are sized for
pub const MAX_WIDTH: u16 = 480;

/// Ring buffer capacity: one slot per column plus one
pub const MAX_POINTS: usize = MAX_WIDTH as usize + 1;

/// Geometry constants for one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    width: u16,
    height: u16,
    x_offset: i32,
    y_offset: i32,
    point_count: usize,
}

impl Geometry {
    /// Derive geometry from panel dimensions
    pub fn new(width: u16, height: u16) -> Result<Self, ScopeError> {
        if width == 0 || height == 0 {
            return Err(ScopeError::EmptyDisplay);
        }
        if width > MAX_WIDTH {
            return Err(ScopeError::WidthTooLarge {
                width,
                max: MAX_WIDTH,
            });
        }

        Ok(Self {
            width,
            height,
            x_offset: i32::from(width >> 1),
            y_offset: i32::from(height >> 1),
            point_count: usize::from(width) + 1,
        })
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Column of the vertical axis
    pub const fn x_offset(&self) -> i32 {
        self.x_offset
    }

    /// Row of the horizontal axis (sample value zero)
    pub const fn y_offset(&self) -> i32 {
        self.y_offset
    }

    /// Ring buffer length (`width + 1`)
    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// Screen row for a sample value
    pub fn screen_y(&self, value: i16) -> i32 {
        i32::from(value) + self.y_offset
    }

    /// Whether `(x, y)` is on the panel
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let geometry = Geometry::new(480, 320).unwrap();
        assert_eq!(geometry.x_offset(), 240);
        assert_eq!(geometry.y_offset(), 160);
        assert_eq!(geometry.point_count(), 481);
    }

    #[test]
    fn test_odd_dimensions_round_down() {
        let geometry = Geometry::new(11, 21).unwrap();
        assert_eq!(geometry.x_offset(), 5);
        assert_eq!(geometry.y_offset(), 10);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Geometry::new(0, 320), Err(ScopeError::EmptyDisplay));
        assert_eq!(Geometry::new(480, 0), Err(ScopeError::EmptyDisplay));
    }

    #[test]
    fn test_rejects_too_wide() {
        assert_eq!(
            Geometry::new(800, 480),
            Err(ScopeError::WidthTooLarge {
                width: 800,
                max: MAX_WIDTH
            })
        );
    }

    #[test]
    fn test_screen_y_and_contains() {
        let geometry = Geometry::new(10, 20).unwrap();
        assert_eq!(geometry.screen_y(0), 10);
        assert_eq!(geometry.screen_y(-10), 0);
        // Peak amplitude lands one row below the panel
        assert!(!geometry.contains(0, geometry.screen_y(10)));
        assert!(geometry.contains(9, 19));
        assert!(!geometry.contains(10, 0));
    }
}
