//! Frame rate measurement
//!
//! Counts frames over a window of real elapsed time and reports the rate
//! once per window.

/// Measurement window in milliseconds
pub const FPS_WINDOW_MS: u64 = 1000;

/// Frames-per-second counter
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    /// Frames since the window started
    frames: u32,
    /// Window start timestamp; `None` until the first frame
    window_start_ms: Option<u64>,
    /// Most recent report
    last: Option<u32>,
}

impl FpsCounter {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            window_start_ms: None,
            last: None,
        }
    }

    /// Record a frame finished at `now_ms`
    ///
    /// Returns the new rate when a full window has elapsed, `None`
    /// otherwise. The first call only anchors the window.
    pub fn record_frame(&mut self, now_ms: u64) -> Option<u32> {
        let start = match self.window_start_ms {
            Some(start) => start,
            None => {
                self.window_start_ms = Some(now_ms);
                return None;
            }
        };

        self.frames = self.frames.saturating_add(1);
        let elapsed = now_ms.saturating_sub(start);
        if elapsed < FPS_WINDOW_MS {
            return None;
        }

        // Scale to a full second when the window overran
        let fps = (u64::from(self.frames) * 1000 / elapsed) as u32;
        self.frames = 0;
        self.window_start_ms = Some(now_ms);
        self.last = Some(fps);
        Some(fps)
    }

    /// Last reported rate
    pub fn last(&self) -> Option<u32> {
        self.last
    }
}
