//! Counting display used by the unit tests

use embedded_graphics_core::pixelcolor::Rgb565;

use crate::backend::{DisplayError, Orientation, PixelDisplay};

pub struct MockDisplay {
    pub width: u16,
    pub height: u16,
    pub orientation: Orientation,
    pub window: (u16, u16, u16, u16),
    pub pixels_written: u32,
    pub batch_depth: u8,
    pub batches_opened: u32,
    pub batches_closed: u32,
    pub unbatched_writes: u32,
    /// Number of successful runs before `write_run` starts failing
    pub fail_after: Option<u32>,
    runs: u32,
}

impl MockDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::Portrait,
            window: (0, 0, 0, 0),
            pixels_written: 0,
            batch_depth: 0,
            batches_opened: 0,
            batches_closed: 0,
            unbatched_writes: 0,
            fail_after: None,
            runs: 0,
        }
    }
}

impl PixelDisplay for MockDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        if orientation.is_landscape() != self.orientation.is_landscape() {
            core::mem::swap(&mut self.width, &mut self.height);
        }
        self.orientation = orientation;
        Ok(())
    }

    fn begin_batch(&mut self) -> Result<(), DisplayError> {
        self.batch_depth += 1;
        self.batches_opened += 1;
        Ok(())
    }

    fn end_batch(&mut self) -> Result<(), DisplayError> {
        self.batch_depth = self.batch_depth.saturating_sub(1);
        self.batches_closed += 1;
        Ok(())
    }

    fn set_window(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), DisplayError> {
        self.window = (x, y, width, height);
        Ok(())
    }

    fn write_run(&mut self, _color: Rgb565, count: u32) -> Result<(), DisplayError> {
        if let Some(limit) = self.fail_after {
            if self.runs >= limit {
                return Err(DisplayError::Communication);
            }
        }
        self.runs += 1;
        if self.batch_depth == 0 {
            self.unbatched_writes += 1;
        }
        self.pixels_written += count;
        Ok(())
    }
}
