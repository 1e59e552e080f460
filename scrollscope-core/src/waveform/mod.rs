//! Scrolling waveform model
//!
//! Each series keeps one sample per screen column in a ring buffer. Every
//! tick appends one sample per series and redraws only the trace pixels
//! that moved.

pub mod ring;
pub mod sample;
pub mod scroller;

pub use ring::RingBuffer;
pub use sample::sample_value;
pub use scroller::{Series, WaveformScroller, DEFAULT_SERIES_COLORS, SERIES_COUNT};
