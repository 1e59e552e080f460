//! Runtime measurements

pub mod fps;

pub use fps::{FpsCounter, FPS_WINDOW_MS};
