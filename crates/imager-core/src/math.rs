//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and `no_std`.
//!
//! - [`db_to_linear`] / [`linear_to_db`] - level conversions
//! - [`flush_denormal`] - keeps filter state out of the subnormal range
//! - [`ms_to_samples`] - time conversion
//! - [`mono_sum`] - stereo average

use libm::{expf, logf};

/// Convert decibels to linear gain: `10^(dB/20)`.
///
/// ```rust
/// use imager_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels. Inputs at or below 1e-10 floor at -200 dB.
///
/// ```rust
/// use imager_core::linear_to_db;
///
/// assert!(linear_to_db(1.0).abs() < 1e-4);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Convert milliseconds to a sample count at `sample_rate`.
#[inline]
pub fn ms_to_samples(ms: f32, sample_rate: f32) -> f32 {
    ms * sample_rate / 1000.0
}

/// Replace values below 1e-20 in magnitude with zero.
///
/// Subnormal arithmetic is dramatically slower on most CPUs. Filter
/// histories pass through this on every write so a decaying tail reaches
/// exact zero instead of lingering in the subnormal range.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Arithmetic mean of a stereo pair.
#[inline]
pub fn mono_sum(left: f32, right: f32) -> f32 {
    (left + right) * 0.5
}
