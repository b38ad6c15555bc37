//! Linkwitz-Riley 4th-order crossover filters.
//!
//! An LR4 section is two identical Butterworth biquads (Q = 1/√2) in series.
//! A low-pass and a high-pass built at the same cutoff sum to an allpass:
//! the recombined signal has flat magnitude and only a phase rotation around
//! the crossover point.
//!
//! Each channel owns its own cascade so histories never mix, while the
//! cutoff is shared by every channel of one [`LinkwitzRiley`].
//!
//! Reference: Linkwitz, "Active Crossover Networks for Noncoincident Drivers",
//! JAES 1976.

use crate::biquad::{Biquad, Coefficients, highpass_coefficients, lowpass_coefficients};

/// Butterworth Q for each of the two cascaded sections.
const BUTTERWORTH_Q: f32 = core::f32::consts::FRAC_1_SQRT_2;

/// Highest usable cutoff as a fraction of the sample rate. Past Nyquist the
/// RBJ alpha goes negative and the poles leave the unit circle.
const MAX_CUTOFF_RATIO: f32 = 0.45;

/// Maximum number of channels one crossover instance can carry.
pub const MAX_CHANNELS: usize = 2;

/// Which half of the crossover a [`LinkwitzRiley`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverBand {
    /// Content below the cutoff.
    Lowpass,
    /// Content above the cutoff.
    Highpass,
}

/// One band of an LR4 crossover, for up to [`MAX_CHANNELS`] channels.
///
/// ```rust
/// use imager_core::{CrossoverBand, LinkwitzRiley};
///
/// let mut low = LinkwitzRiley::new(CrossoverBand::Lowpass, 48000.0, 120.0);
/// let mut block = [1.0f32; 64];
/// low.process_channel(0, &mut block);
/// assert!(block.iter().all(|s| s.is_finite()));
/// ```
#[derive(Debug, Clone)]
pub struct LinkwitzRiley {
    band: CrossoverBand,
    sample_rate: f32,
    cutoff_hz: f32,
    /// `[channel][stage]`
    stages: [[Biquad; 2]; MAX_CHANNELS],
}

impl LinkwitzRiley {
    /// Creates a crossover band with empty history.
    pub fn new(band: CrossoverBand, sample_rate: f32, cutoff_hz: f32) -> Self {
        let mut filter = Self {
            band,
            sample_rate,
            cutoff_hz,
            stages: core::array::from_fn(|_| core::array::from_fn(|_| Biquad::new())),
        };
        filter.update_coefficients();
        filter
    }

    /// The band this filter passes.
    pub fn band(&self) -> CrossoverBand {
        self.band
    }

    /// Requested cutoff in Hz. Coefficients use at most 0.45 of the sample
    /// rate.
    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Retunes every channel's cascade to `cutoff_hz`.
    ///
    /// History is preserved. Calls with an unchanged cutoff return without
    /// recomputing coefficients, so this is cheap to call once per block.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        if (self.cutoff_hz - cutoff_hz).abs() <= f32::EPSILON {
            return;
        }
        self.cutoff_hz = cutoff_hz;
        self.update_coefficients();
    }

    /// Changes the sample rate and recomputes coefficients.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.update_coefficients();
    }

    /// Processes one sample of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= MAX_CHANNELS`.
    #[inline]
    pub fn process(&mut self, channel: usize, input: f32) -> f32 {
        let [first, second] = &mut self.stages[channel];
        second.process(first.process(input))
    }

    /// Filters one channel's block in place.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= MAX_CHANNELS`.
    pub fn process_channel(&mut self, channel: usize, samples: &mut [f32]) {
        let [first, second] = &mut self.stages[channel];
        for sample in samples.iter_mut() {
            *sample = second.process(first.process(*sample));
        }
    }

    /// Clears all channel histories.
    pub fn reset(&mut self) {
        for stage in self.stages.iter_mut().flatten() {
            stage.clear();
        }
    }

    fn coefficients(&self) -> Coefficients {
        let cutoff = self.cutoff_hz.min(self.sample_rate * MAX_CUTOFF_RATIO);
        match self.band {
            CrossoverBand::Lowpass => lowpass_coefficients(cutoff, BUTTERWORTH_Q, self.sample_rate),
            CrossoverBand::Highpass => {
                highpass_coefficients(cutoff, BUTTERWORTH_Q, self.sample_rate)
            }
        }
    }

    fn update_coefficients(&mut self) {
        let coefficients = self.coefficients();
        for stage in self.stages.iter_mut().flatten() {
            stage.apply(coefficients);
        }
    }
}
