//! Pixel display trait
//!
//! Defines the interface for pixel-streaming panels.

use embedded_graphics_core::pixelcolor::Rgb565;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display or touch controller
    Communication,
    /// Hardware did not answer during bring-up
    NotDetected,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Panel orientation
///
/// Numbered like the panel's rotation register: even values are portrait,
/// odd values are landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Native orientation of the panel
    #[default]
    Portrait,
    /// Rotated 90 degrees
    Landscape,
    /// Rotated 180 degrees
    PortraitInverted,
    /// Rotated 270 degrees
    LandscapeInverted,
}

impl Orientation {
    /// Rotation index (0-3)
    pub const fn index(self) -> u8 {
        match self {
            Orientation::Portrait => 0,
            Orientation::Landscape => 1,
            Orientation::PortraitInverted => 2,
            Orientation::LandscapeInverted => 3,
        }
    }

    /// Orientation for a rotation index; only the low two bits are used
    pub const fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Orientation::Portrait,
            1 => Orientation::Landscape,
            2 => Orientation::PortraitInverted,
            _ => Orientation::LandscapeInverted,
        }
    }

    /// Swap between portrait and landscape (rotation `^ 1`)
    pub const fn quarter_turn(self) -> Self {
        Self::from_index(self.index() ^ 1)
    }

    /// Whether the long edge is horizontal
    pub const fn is_landscape(self) -> bool {
        self.index() & 1 == 1
    }
}

/// Pixel display trait
///
/// Provides a hardware-agnostic interface for streaming pixels to a panel.
/// All coordinates are in the current orientation and must lie inside
/// `width() x height()`; callers clip before writing.
///
/// Pixel writes belong inside a batch. Batches nest: only the outermost
/// `end_batch` releases the bus.
pub trait PixelDisplay {
    /// Bring up the panel
    ///
    /// Fails with `DisplayError::NotDetected` or `Communication` when the
    /// hardware is absent. There is no meaningful retry.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Width in pixels for the current orientation
    fn width(&self) -> u16;

    /// Height in pixels for the current orientation
    fn height(&self) -> u16;

    /// Current orientation
    fn orientation(&self) -> Orientation;

    /// Change orientation; `width()`/`height()` follow
    fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError>;

    /// Open a write transaction
    fn begin_batch(&mut self) -> Result<(), DisplayError>;

    /// Close a write transaction
    fn end_batch(&mut self) -> Result<(), DisplayError>;

    /// Set the address window for subsequent `write_run` calls
    ///
    /// Pixels stream row-major inside the window.
    fn set_window(&mut self, x: u16, y: u16, width: u16, height: u16)
        -> Result<(), DisplayError>;

    /// Stream `count` pixels of one color into the current window
    fn write_run(&mut self, color: Rgb565, count: u32) -> Result<(), DisplayError>;

    /// Write a single pixel
    fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        self.set_window(x, y, 1, 1)?;
        self.write_run(color, 1)
    }

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.set_window(x, y, width, height)?;
        self.write_run(color, u32::from(width) * u32::from(height))
    }

    /// Whether `(x, y)` lies on the panel
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width()) && y < i32::from(self.height())
    }
}
