//! Drawing on the panel
//!
//! Background grid, touch marker and text readouts. The waveform traces
//! themselves are drawn by `WaveformScroller`.

pub mod background;
pub mod overlay;
pub mod status;

pub use background::{classify, fill_background, BaseColor, Palette};
pub use overlay::TouchOverlay;
pub use status::StatusLine;
