//! Text readouts
//!
//! `fps:NNN` in the top-left corner and `Touch:(XXX,YYY)` in the top-right.
//! Text is drawn with an opaque background so each update overwrites the
//! previous one.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use scrollscope_display::{Batch, Canvas, DisplayError, PixelDisplay, TouchPoint};

use crate::render::background::Palette;

/// Width reserved for the touch readout at the right edge
pub const TOUCH_READOUT_WIDTH: u16 = 100;

/// Longest readout: `Touch:(65535,65535)`
const READOUT_LEN: usize = 24;

/// Status text renderer
#[derive(Debug, Clone, Copy)]
pub struct StatusLine {
    style: MonoTextStyle<'static, Rgb565>,
}

impl StatusLine {
    pub fn new(palette: &Palette) -> Self {
        Self {
            style: MonoTextStyleBuilder::new()
                .font(&FONT_6X10)
                .text_color(palette.axis)
                .background_color(palette.background)
                .build(),
        }
    }

    /// Draw the frame rate readout
    pub fn draw_fps<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        fps: u32,
    ) -> Result<(), DisplayError> {
        let mut text: String<READOUT_LEN> = String::new();
        write!(text, "fps:{:03}", fps).map_err(|_| DisplayError::BufferOverflow)?;
        self.draw_text(display, 0, &text)
    }

    /// Draw the touch coordinate readout
    pub fn draw_touch<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        point: TouchPoint,
    ) -> Result<(), DisplayError> {
        let mut text: String<READOUT_LEN> = String::new();
        write!(text, "Touch:({:03},{:03})", point.x, point.y)
            .map_err(|_| DisplayError::BufferOverflow)?;
        let x = display.width().saturating_sub(TOUCH_READOUT_WIDTH);
        self.draw_text(display, x, &text)
    }

    fn draw_text<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        x: u16,
        text: &str,
    ) -> Result<(), DisplayError> {
        let mut batch = Batch::begin(display)?;
        Text::with_baseline(text, Point::new(i32::from(x), 0), self.style, Baseline::Top)
            .draw(&mut Canvas::new(&mut *batch))?;
        batch.finish()
    }
}
