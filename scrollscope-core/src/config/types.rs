//! Configuration type definitions

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::waveform::SERIES_COUNT;

/// Longest allowed frame interval
pub const MAX_FRAME_INTERVAL_MS: u32 = 1000;

/// Largest touch marker edge
pub const MAX_MARKER_SIZE: u16 = 31;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Frame interval outside 1..=1000 ms
    FrameInterval(u32),
    /// Marker size even, zero, or above the maximum
    MarkerSize(u16),
    /// Two series share a color (indices of the pair)
    DuplicateColor(usize, usize),
}

/// Oscillograph configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ScopeConfig {
    /// Pause between frames, yielding to other work
    pub frame_interval_ms: u32,
    /// Show the `fps:NNN` readout
    pub show_fps: bool,
    /// Draw touch markers and the touch coordinate readout
    pub show_touch: bool,
    /// Touch marker edge length (odd)
    pub touch_marker_size: u16,
    /// Raw RGB565 color per series
    pub series_colors: [u16; SERIES_COUNT],
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeConfig {
    /// Defaults: 10 ms frames, both readouts on, 5 px marker,
    /// red/green/blue/cyan/magenta/yellow traces
    pub const fn new() -> Self {
        Self {
            frame_interval_ms: 10,
            show_fps: true,
            show_touch: true,
            touch_marker_size: 5,
            series_colors: [0xF800, 0x07E0, 0x001F, 0x07FF, 0xF81F, 0xFFE0],
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 || self.frame_interval_ms > MAX_FRAME_INTERVAL_MS {
            return Err(ConfigError::FrameInterval(self.frame_interval_ms));
        }

        let size = self.touch_marker_size;
        if size == 0 || size % 2 == 0 || size > MAX_MARKER_SIZE {
            return Err(ConfigError::MarkerSize(size));
        }

        for (i, a) in self.series_colors.iter().enumerate() {
            for (j, b) in self.series_colors.iter().enumerate().skip(i + 1) {
                if a == b {
                    return Err(ConfigError::DuplicateColor(i, j));
                }
            }
        }

        Ok(())
    }

    /// Series colors as RGB565
    pub fn colors(&self) -> [Rgb565; SERIES_COUNT] {
        self.series_colors.map(|raw| Rgb565::from(RawU16::new(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::DEFAULT_SERIES_COLORS;

    #[test]
    fn test_default_is_valid() {
        let config = ScopeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.colors(), DEFAULT_SERIES_COLORS);
    }

    #[test]
    fn test_frame_interval_range() {
        let mut config = ScopeConfig::new();
        config.frame_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::FrameInterval(0)));

        config.frame_interval_ms = 1001;
        assert_eq!(config.validate(), Err(ConfigError::FrameInterval(1001)));

        config.frame_interval_ms = 1000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_marker_size() {
        let mut config = ScopeConfig::new();
        for bad in [0, 4, 33] {
            config.touch_marker_size = bad;
            assert_eq!(config.validate(), Err(ConfigError::MarkerSize(bad)));
        }
        config.touch_marker_size = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_colors() {
        let mut config = ScopeConfig::new();
        config.series_colors[4] = config.series_colors[1];
        assert_eq!(config.validate(), Err(ConfigError::DuplicateColor(1, 4)));
    }
}
