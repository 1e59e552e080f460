//! Incremental waveform redraw
//!
//! Screen column `x` shows ring offset `x + 1` (counted from the oldest
//! slot). When the ring advances by one sample, every trace shifts one
//! column left, so column `x` only has to swap the pixel of offset `x`
//! (drawn there last frame) for the pixel of offset `x + 1`.
//!
//! Per frame this costs `O(width * series)` pixel writes instead of a
//! full `O(width * height)` repaint.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use scrollscope_display::{Batch, DisplayError, PixelDisplay};

use crate::error::ScopeError;
use crate::geometry::{Geometry, MAX_POINTS};
use crate::render::background::{fill_background, Palette};
use crate::waveform::ring::RingBuffer;
use crate::waveform::sample::sample_value;

/// Number of traces
pub const SERIES_COUNT: usize = 6;

/// Trace colors: red, green, blue, cyan, magenta, yellow
pub const DEFAULT_SERIES_COLORS: [Rgb565; SERIES_COUNT] = [
    Rgb565::RED,
    Rgb565::GREEN,
    Rgb565::BLUE,
    Rgb565::CYAN,
    Rgb565::MAGENTA,
    Rgb565::YELLOW,
];

/// One trace: its samples and fixed color
#[derive(Debug, Clone)]
pub struct Series {
    samples: RingBuffer<MAX_POINTS>,
    color: Rgb565,
}

impl Series {
    pub fn samples(&self) -> &RingBuffer<MAX_POINTS> {
        &self.samples
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }
}

/// Owns all traces and the tick counter
#[derive(Debug, Clone)]
pub struct WaveformScroller {
    geometry: Geometry,
    palette: Palette,
    series: [Series; SERIES_COUNT],
    /// Samples generated so far; also the ring head of every series
    tick: u32,
    /// Panel no longer holds the previous frame
    needs_full_redraw: bool,
}

impl WaveformScroller {
    /// Create a scroller for a `width x height` panel with zeroed traces
    pub fn new(
        width: u16,
        height: u16,
        colors: [Rgb565; SERIES_COUNT],
    ) -> Result<Self, ScopeError> {
        Self::with_palette(Geometry::new(width, height)?, Palette::default(), colors)
    }

    pub fn with_palette(
        geometry: Geometry,
        palette: Palette,
        colors: [Rgb565; SERIES_COUNT],
    ) -> Result<Self, ScopeError> {
        let samples = RingBuffer::new(geometry.point_count())?;

        Ok(Self {
            geometry,
            palette,
            series: colors.map(|color| Series {
                samples: samples.clone(),
                color,
            }),
            tick: 0,
            needs_full_redraw: false,
        })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current tick (number of samples generated per series)
    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn series(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// True after a failed render, until a repaint succeeds
    pub fn needs_full_redraw(&self) -> bool {
        self.needs_full_redraw
    }

    /// Generate one sample per series for the current tick, then advance
    ///
    /// Writes ring slot `tick mod point_count` of every series and nothing
    /// else.
    pub fn advance(&mut self) {
        let height = self.geometry.height();
        for (index, series) in self.series.iter_mut().enumerate() {
            series.samples.push(sample_value(self.tick, index, height));
        }
        self.tick = self.tick.wrapping_add(1);
    }

    /// Redraw the columns that changed since the previous frame
    ///
    /// For column `x`, `old = at(x)` and `new = at(x + 1)`. Old pixels whose
    /// value moved are restored to the background color; then every new
    /// pixel is painted in its series color. All writes form one batch.
    ///
    /// The erase pass relies on the previous frame having been drawn in
    /// full. After a failed render the next one repaints the background
    /// and every current trace point instead.
    pub fn render<D: PixelDisplay + ?Sized>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        let result = if self.needs_full_redraw {
            self.repaint(display)
        } else {
            self.redraw(display)
        };
        self.needs_full_redraw = result.is_err();
        result
    }

    fn redraw<D: PixelDisplay + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        let mut batch = Batch::begin(display)?;
        self.draw_columns(&mut *batch)?;
        batch.finish()
    }

    fn repaint<D: PixelDisplay + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        let mut batch = Batch::begin(display)?;
        fill_background(&mut *batch, &self.geometry, &self.palette)?;
        self.draw_traces(&mut *batch)?;
        batch.finish()
    }

    /// `advance` followed by `render`
    pub fn step<D: PixelDisplay + ?Sized>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        self.advance();
        self.render(display)
    }

    fn draw_columns<D: PixelDisplay + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        let columns = self.geometry.point_count() - 1;

        for x in 0..columns {
            let column = x as i32;

            for series in &self.series {
                let old = series.samples.at(x);
                if old != series.samples.at(x + 1) {
                    let color = self.palette.color_at(&self.geometry, column, i32::from(old));
                    self.put(display, column, old, color)?;
                }
            }

            for series in &self.series {
                self.put(display, column, series.samples.at(x + 1), series.color)?;
            }
        }

        Ok(())
    }

    fn draw_traces<D: PixelDisplay + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        let columns = self.geometry.point_count() - 1;
        for x in 0..columns {
            for series in &self.series {
                self.put(display, x as i32, series.samples.at(x + 1), series.color)?;
            }
        }
        Ok(())
    }

    /// Write a trace pixel, skipping rows that fall off the panel
    fn put<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        x: i32,
        value: i16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let y = self.geometry.screen_y(value);
        if !self.geometry.contains(x, y) {
            return Ok(());
        }
        display.write_pixel(x as u16, y as u16, color)
    }
}
