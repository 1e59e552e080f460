//! In-memory panel used by the unit tests

use std::vec;
use std::vec::Vec;

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use scrollscope_display::{DisplayError, Orientation, PixelDisplay, TouchPanel, TouchPoint};

/// Framebuffer-backed display that records every write
pub struct MockPanel {
    width: u16,
    height: u16,
    orientation: Orientation,
    pixels: Vec<Rgb565>,
    window: (u16, u16, u16, u16),
    cursor: u32,
    pub batch_depth: u8,
    pub batches_opened: u32,
    pub pixels_streamed: u32,
    /// Single-pixel writes as `(x, y, color)`
    pub pixel_log: Vec<(u16, u16, Rgb565)>,
    /// Writes that happened outside any batch
    pub unbatched_writes: u32,
    /// Number of successful runs before `write_run` starts failing
    pub fail_after: Option<u32>,
    runs: u32,
}

impl MockPanel {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::Landscape,
            pixels: vec![Rgb565::BLACK; usize::from(width) * usize::from(height)],
            window: (0, 0, width, height),
            cursor: 0,
            batch_depth: 0,
            batches_opened: 0,
            pixels_streamed: 0,
            pixel_log: Vec::new(),
            unbatched_writes: 0,
            fail_after: None,
            runs: 0,
        }
    }

    /// Panel that starts in portrait with the given native size
    pub fn portrait(width: u16, height: u16) -> Self {
        let mut panel = Self::new(width, height);
        panel.orientation = Orientation::Portrait;
        panel
    }

    pub fn pixel(&self, x: u16, y: u16) -> Rgb565 {
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    /// Fail every run after the next `runs`
    pub fn fail_in(&mut self, runs: u32) {
        self.fail_after = Some(self.runs + runs);
    }

    pub fn clear_log(&mut self) {
        self.pixel_log.clear();
    }
}

impl PixelDisplay for MockPanel {
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
        Ok(())
    }

    fn set_window(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), DisplayError> {
        if x + width > self.width || y + height > self.height {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.window = (x, y, width, height);
        self.cursor = 0;
        Ok(())
    }

    fn write_run(&mut self, color: Rgb565, count: u32) -> Result<(), DisplayError> {
        if let Some(limit) = self.fail_after {
            if self.runs >= limit {
                return Err(DisplayError::Communication);
            }
        }
        self.runs += 1;
        if self.batch_depth == 0 {
            self.unbatched_writes += 1;
        }

        let (wx, wy, ww, wh) = self.window;
        let area = u32::from(ww) * u32::from(wh);
        for _ in 0..count {
            if self.cursor >= area {
                return Err(DisplayError::BufferOverflow);
            }
            let x = u32::from(wx) + self.cursor % u32::from(ww);
            let y = u32::from(wy) + self.cursor / u32::from(ww);
            self.pixels[y as usize * usize::from(self.width) + x as usize] = color;
            self.cursor += 1;
        }
        self.pixels_streamed += count;
        Ok(())
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        self.set_window(x, y, 1, 1)?;
        self.write_run(color, 1)?;
        self.pixel_log.push((x, y, color));
        Ok(())
    }
}

/// Touch controller replaying a scripted sequence of samples
pub struct ScriptedTouch {
    samples: Vec<Result<Option<TouchPoint>, DisplayError>>,
}

impl ScriptedTouch {
    pub fn new(samples: Vec<Result<Option<TouchPoint>, DisplayError>>) -> Self {
        let mut samples = samples;
        samples.reverse();
        Self { samples }
    }

    pub fn untouched() -> Self {
        Self::new(Vec::new())
    }
}

impl TouchPanel for ScriptedTouch {
    fn poll_touch(&mut self) -> Result<Option<TouchPoint>, DisplayError> {
        self.samples.pop().unwrap_or(Ok(None))
    }
}
