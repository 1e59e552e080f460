//! Background grid
//!
//! A dotted grid every 32 pixels with a solid center cross. The same
//! classifier paints the initial frame and restores pixels when a trace
//! moves away, so an erased pixel always matches the initial background.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use scrollscope_display::{Batch, DisplayError, PixelDisplay};

use crate::geometry::Geometry;

/// Grid spacing mask (32 px)
const GRID_MASK: i32 = 31;

/// Dot spacing mask along grid lines (every 4th pixel)
const DOT_MASK: i32 = 3;

/// Background classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaseColor {
    /// Empty area
    Background,
    /// Center cross
    Axis,
    /// Dotted grid lines
    Grid,
}

/// Classify a pixel of the background
///
/// - `x`: screen column
/// - `y`: row relative to the horizontal axis (`screen_y - y_offset`)
pub fn classify(geometry: &Geometry, x: i32, y: i32) -> BaseColor {
    let on_dot = (x ^ y) & DOT_MASK == 0;
    let on_line = (x - geometry.x_offset()) & GRID_MASK == 0 || y & GRID_MASK == 0;

    if !on_dot || !on_line {
        BaseColor::Background
    } else if y == 0 || x == geometry.x_offset() {
        BaseColor::Axis
    } else {
        BaseColor::Grid
    }
}

/// Colors for each background class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub axis: Rgb565,
    pub grid: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb565::BLACK,
            axis: Rgb565::WHITE,
            // 0x03E0
            grid: Rgb565::new(0, 31, 0),
        }
    }
}

impl Palette {
    pub const fn color(&self, base: BaseColor) -> Rgb565 {
        match base {
            BaseColor::Background => self.background,
            BaseColor::Axis => self.axis,
            BaseColor::Grid => self.grid,
        }
    }

    /// Background color of a pixel
    pub fn color_at(&self, geometry: &Geometry, x: i32, y: i32) -> Rgb565 {
        self.color(classify(geometry, x, y))
    }
}

/// Paint the whole panel with the background grid
///
/// Streams every pixel exactly once, row-major, in a single transaction.
/// Consecutive pixels of the same color are sent as one run.
pub fn fill_background<D: PixelDisplay + ?Sized>(
    display: &mut D,
    geometry: &Geometry,
    palette: &Palette,
) -> Result<(), DisplayError> {
    let mut batch = Batch::begin(display)?;
    batch.set_window(0, 0, geometry.width(), geometry.height())?;

    let mut run: Option<(Rgb565, u32)> = None;
    for row in 0..i32::from(geometry.height()) {
        let y = row - geometry.y_offset();
        for x in 0..i32::from(geometry.width()) {
            let color = palette.color_at(geometry, x, y);
            run = match run {
                Some((current, count)) if current == color => Some((current, count + 1)),
                Some((current, count)) => {
                    batch.write_run(current, count)?;
                    Some((color, 1))
                }
                None => Some((color, 1)),
            };
        }
    }
    if let Some((color, count)) = run {
        batch.write_run(color, count)?;
    }

    batch.finish()
}
