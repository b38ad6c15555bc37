//! Second-order IIR section.
//!
//! [`Biquad`] is the building block of the crossover and any other
//! second-order filtering in the chain. Coefficients come from the RBJ Audio
//! EQ Cookbook; only the low-pass and high-pass shapes are needed here.

use core::f32::consts::PI;
use libm::{cosf, sinf};

use crate::math::flush_denormal;

/// Raw RBJ coefficients in `(b0, b1, b2, a0, a1, a2)` order, not yet
/// normalized by `a0`.
pub type Coefficients = (f32, f32, f32, f32, f32, f32);

/// Direct Form I biquad.
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// The output history is flushed to zero once it falls below the denormal
/// threshold, so a decaying tail never drops into the subnormal range.
#[derive(Debug, Clone)]
pub struct Biquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// Creates a biquad with passthrough coefficients (`y[n] = x[n]`).
    pub fn new() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Sets the coefficients, normalizing by `a0`.
    ///
    /// History is left untouched so a running filter can be retuned without
    /// a discontinuity in its state.
    pub fn set_coefficients(&mut self, b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) {
        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }

    /// Applies a coefficient tuple as returned by [`lowpass_coefficients`] or
    /// [`highpass_coefficients`].
    #[inline]
    pub fn apply(&mut self, coefficients: Coefficients) {
        let (b0, b1, b2, a0, a1, a2) = coefficients;
        self.set_coefficients(b0, b1, b2, a0, a1, a2);
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = flush_denormal(output);

        output
    }

    /// Filters a block in place.
    #[inline]
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clears the delay lines without touching the coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

/// Low-pass coefficients (RBJ cookbook).
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for a Butterworth section)
/// * `sample_rate` - Sample rate in Hz
pub fn lowpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> Coefficients {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    let b1 = 1.0 - cos_omega;
    let b0 = b1 / 2.0;
    (b0, b1, b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
}

/// High-pass coefficients (RBJ cookbook).
///
/// Same arguments as [`lowpass_coefficients`]. With a matching cutoff and
/// Q the two responses are complementary in the Linkwitz-Riley sense once
/// each is cascaded twice.
pub fn highpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> Coefficients {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    let b0 = (1.0 + cos_omega) / 2.0;
    (b0, -(1.0 + cos_omega), b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
}
