//! Sample generator
//!
//! Each series is the sum of two sines with series-specific periods, so
//! the traces drift in and out of phase with each other.

use libm::sinf;

/// Sample for series `series` at tick `tick` on a panel `height` rows tall
///
/// `(sin(t / (10 + 30i)) + sin(t / (13 + 37i))) * (height / 4)`, truncated
/// toward zero. The result spans at most `±height / 2`.
pub fn sample_value(tick: u32, series: usize, height: u16) -> i16 {
    let t = tick as f32;
    let i = series as f32;
    let amplitude = f32::from(height >> 2);

    let value = (sinf(t / (10.0 + 30.0 * i)) + sinf(t / (13.0 + 37.0 * i))) * amplitude;
    value as i16
}
