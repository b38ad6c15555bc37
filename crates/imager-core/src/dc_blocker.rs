//! DC blocking filter.
//!
//! First-order high-pass (Julius O. Smith's DC blocker):
//!
//! ```text
//! H(z) = (1 - z^-1) / (1 - R*z^-1)
//! R    = 1 - 2*pi*fc/fs
//! ```
//!
//! The utility chain runs it at 10 Hz as the very last stage.
//!
//! Reference: Julius O. Smith, "Introduction to Digital Filters with Audio
//! Applications", DC Blocker.

use core::f32::consts::PI;

use crate::math::flush_denormal;

/// DC blocking filter using a first-order high-pass.
///
/// ```rust
/// use imager_core::DcBlocker;
///
/// let mut blocker = DcBlocker::new(48000.0);
/// let mut out = 1.0;
/// for _ in 0..48000 {
///     out = blocker.process(1.0);
/// }
/// assert!(out.abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct DcBlocker {
    /// Pole position R.
    coeff: f32,
    cutoff_hz: f32,
    x_prev: f32,
    y_prev: f32,
}

impl DcBlocker {
    /// Default cutoff in Hz.
    pub const DEFAULT_CUTOFF_HZ: f32 = 10.0;

    /// Creates a blocker at [`DEFAULT_CUTOFF_HZ`](Self::DEFAULT_CUTOFF_HZ).
    pub fn new(sample_rate: f32) -> Self {
        Self::with_cutoff(sample_rate, Self::DEFAULT_CUTOFF_HZ)
    }

    /// Creates a blocker with an explicit cutoff.
    pub fn with_cutoff(sample_rate: f32, cutoff_hz: f32) -> Self {
        Self {
            coeff: Self::calculate_coeff(cutoff_hz, sample_rate),
            cutoff_hz,
            x_prev: 0.0,
            y_prev: 0.0,
        }
    }

    /// Processes one sample: `y[n] = x[n] - x[n-1] + R * y[n-1]`.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = input - self.x_prev + self.coeff * self.y_prev;
        self.x_prev = input;
        self.y_prev = flush_denormal(output);
        output
    }

    /// Filters a block in place.
    #[inline]
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clears the filter history.
    pub fn reset(&mut self) {
        self.x_prev = 0.0;
        self.y_prev = 0.0;
    }

    /// Recomputes R for a new sample rate, keeping the cutoff.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.coeff = Self::calculate_coeff(self.cutoff_hz, sample_rate);
    }

    /// Cutoff in Hz.
    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    /// Current R coefficient.
    pub fn coeff(&self) -> f32 {
        self.coeff
    }

    // Clamped so extreme rates or cutoffs cannot push the pole onto or past
    // the unit circle.
    fn calculate_coeff(cutoff_hz: f32, sample_rate: f32) -> f32 {
        let r = 1.0 - (2.0 * PI * cutoff_hz / sample_rate);
        r.clamp(0.9, 0.9999)
    }
}
