//! Frame orchestration
//!
//! Startup paints the background once. After that every frame runs the
//! same cycle:
//!
//! ```text
//! fps readout ─► generate samples ─► erase stale / draw current ─► touch overlay
//! ```
//!
//! There is no terminal state; the caller loops until power-off.

use scrollscope_display::{DisplayError, PixelDisplay, TouchPanel, TouchPoint};

use crate::config::ScopeConfig;
use crate::error::ScopeError;
use crate::geometry::Geometry;
use crate::render::{fill_background, Palette, StatusLine, TouchOverlay};
use crate::telemetry::FpsCounter;
use crate::waveform::WaveformScroller;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// Tick after this frame
    pub tick: u32,
    /// New frame rate, once per second
    pub fps: Option<u32>,
    /// Touch point drawn this frame
    pub touch: Option<TouchPoint>,
    /// Touch controller read failure; the overlay was skipped
    pub touch_error: Option<DisplayError>,
}

/// Running oscillograph
pub struct Scope {
    config: ScopeConfig,
    scroller: WaveformScroller,
    overlay: TouchOverlay,
    status: StatusLine,
    fps: FpsCounter,
}

impl Scope {
    /// Prepare the panel and build the scroller
    ///
    /// Rotates portrait panels to landscape, then paints the background
    /// grid over the whole panel.
    pub fn start<D: PixelDisplay + ?Sized>(
        display: &mut D,
        config: ScopeConfig,
    ) -> Result<Self, ScopeError> {
        if display.width() < display.height() {
            let landscape = display.orientation().quarter_turn();
            display.set_orientation(landscape)?;
        }

        let geometry = Geometry::new(display.width(), display.height())?;
        let palette = Palette::default();
        let scroller = WaveformScroller::with_palette(geometry, palette, config.colors())?;

        fill_background(display, &geometry, &palette)?;

        Ok(Self {
            config,
            scroller,
            overlay: TouchOverlay::new(config.touch_marker_size),
            status: StatusLine::new(&palette),
            fps: FpsCounter::new(),
        })
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn scroller(&self) -> &WaveformScroller {
        &self.scroller
    }

    /// Run one frame
    ///
    /// - `now_ms`: monotonic timestamp used for the frame rate
    pub fn frame<D, T>(
        &mut self,
        display: &mut D,
        touch: &mut T,
        now_ms: u64,
    ) -> Result<FrameReport, DisplayError>
    where
        D: PixelDisplay + ?Sized,
        T: TouchPanel + ?Sized,
    {
        let fps = self.fps.record_frame(now_ms);
        if let (true, Some(rate)) = (self.config.show_fps, fps) {
            self.status.draw_fps(display, rate)?;
        }

        self.scroller.step(display)?;

        let mut report = FrameReport {
            tick: self.scroller.tick(),
            fps,
            touch: None,
            touch_error: None,
        };

        if !self.config.show_touch {
            return Ok(report);
        }

        match touch.poll_touch() {
            Ok(Some(point)) => {
                self.overlay.draw(display, point, report.tick)?;
                self.status.draw_touch(display, point)?;
                report.touch = Some(point);
            }
            Ok(None) => {}
            Err(e) => report.touch_error = Some(e),
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPanel, ScriptedTouch};
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
    use scrollscope_display::Orientation;
    use std::vec;

    #[test]
    fn test_start_rotates_portrait_panel() {
        let mut panel = MockPanel::portrait(320, 480);
        let scope = Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        assert_eq!(panel.orientation(), Orientation::Landscape);
        let geometry = scope.scroller().geometry();
        assert_eq!((geometry.width(), geometry.height()), (480, 320));
        assert_eq!(geometry.x_offset(), 240);
        assert_eq!(geometry.y_offset(), 160);
    }

    #[test]
    fn test_start_paints_background() {
        let mut panel = MockPanel::new(64, 48);
        Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        assert_eq!(panel.pixels_streamed, 64 * 48);
        // Center cross
        assert_eq!(panel.pixel(32, 24), Rgb565::WHITE);
        assert_eq!(panel.pixel(0, 24), Rgb565::WHITE);
        assert_eq!(panel.pixel(1, 24), Rgb565::BLACK);
    }

    #[test]
    fn test_start_rejects_oversized_panel() {
        let mut panel = MockPanel::new(600, 400);
        assert!(matches!(
            Scope::start(&mut panel, ScopeConfig::default()),
            Err(ScopeError::WidthTooLarge { .. })
        ));
    }

    #[test]
    fn test_frame_advances_tick() {
        let mut panel = MockPanel::new(64, 48);
        let mut touch = ScriptedTouch::untouched();
        let mut scope = Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        for n in 1..=5 {
            let report = scope.frame(&mut panel, &mut touch, n * 10).unwrap();
            assert_eq!(report.tick, n as u32);
            assert_eq!(report.touch, None);
        }
    }

    #[test]
    fn test_touch_draws_marker() {
        let mut panel = MockPanel::new(64, 48);
        let point = TouchPoint::new(20, 40);
        let mut touch = ScriptedTouch::new(vec![Ok(Some(point))]);
        let mut scope = Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        let report = scope.frame(&mut panel, &mut touch, 0).unwrap();

        assert_eq!(report.touch, Some(point));
        assert_eq!(panel.pixel(22, 42), TouchOverlay::marker_color(1));
        assert_eq!(panel.batch_depth, 0);
    }

    #[test]
    fn test_touch_error_skips_overlay() {
        let mut panel = MockPanel::new(64, 48);
        let mut touch = ScriptedTouch::new(vec![Err(DisplayError::Communication), Ok(None)]);
        let mut scope = Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        let report = scope.frame(&mut panel, &mut touch, 0).unwrap();
        assert_eq!(report.touch_error, Some(DisplayError::Communication));
        assert_eq!(report.touch, None);

        let report = scope.frame(&mut panel, &mut touch, 10).unwrap();
        assert_eq!(report.touch_error, None);
        assert_eq!(report.tick, 2);
    }

    #[test]
    fn test_touch_disabled_never_polls() {
        let mut panel = MockPanel::new(64, 48);
        let mut touch = ScriptedTouch::new(vec![Ok(Some(TouchPoint::new(5, 5)))]);
        let config = ScopeConfig {
            show_touch: false,
            ..ScopeConfig::default()
        };
        let mut scope = Scope::start(&mut panel, config).unwrap();

        let report = scope.frame(&mut panel, &mut touch, 0).unwrap();
        assert_eq!(report.touch, None);
        // Sample still queued
        assert_eq!(touch.poll_touch(), Ok(Some(TouchPoint::new(5, 5))));
    }

    #[test]
    fn test_fps_reported_each_second() {
        let mut panel = MockPanel::new(64, 48);
        let mut touch = ScriptedTouch::untouched();
        let mut scope = Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        let reports = (0..=100u64)
            .filter_map(|n| scope.frame(&mut panel, &mut touch, n * 20).unwrap().fps)
            .count();

        // Windows close at 1000 and 2000 ms
        assert_eq!(reports, 2);
    }

    #[test]
    fn test_frame_error_propagates() {
        let mut panel = MockPanel::new(64, 48);
        let mut touch = ScriptedTouch::untouched();
        let mut scope = Scope::start(&mut panel, ScopeConfig::default()).unwrap();

        panel.fail_after = Some(0);
        assert!(scope.frame(&mut panel, &mut touch, 0).is_err());
        assert_eq!(panel.batch_depth, 0);
        assert!(scope.scroller().needs_full_redraw());

        // Next frame repaints the panel and carries on
        panel.fail_after = None;
        let before = panel.pixels_streamed;
        let report = scope.frame(&mut panel, &mut touch, 10).unwrap();
        assert_eq!(report.tick, 2);
        assert!(!scope.scroller().needs_full_redraw());
        assert!(panel.pixels_streamed - before >= 64 * 48);
    }
}
