//! Linearly ramped parameter values.
//!
//! A value that changes abruptly mid-stream produces an audible step
//! ("zipper noise"). [`LinearSmoothedParam`] walks from its current value to
//! a new target in equal increments over a fixed transition time.
//!
//! ```rust
//! use imager_core::LinearSmoothedParam;
//!
//! let mut gain = LinearSmoothedParam::with_config(1.0, 48000.0, 30.0);
//! gain.set_target(0.5);
//!
//! // 30 ms at 48 kHz
//! for _ in 0..1440 {
//!     gain.advance();
//! }
//! assert!(gain.is_settled());
//! assert_eq!(gain.get(), 0.5);
//! ```

use crate::math::ms_to_samples;

/// A parameter that ramps linearly toward its target.
///
/// A new target restarts the ramp from wherever the value currently is, so
/// retargeting mid-ramp never jumps.
#[derive(Debug, Clone)]
pub struct LinearSmoothedParam {
    current: f32,
    target: f32,
    /// Per-sample step, signed.
    increment: f32,
    samples_remaining: u32,
    sample_rate: f32,
    transition_time_ms: f32,
}

impl LinearSmoothedParam {
    /// Creates a parameter at `initial` with a 10 ms ramp at 44.1 kHz.
    pub fn new(initial: f32) -> Self {
        Self::with_config(initial, 44100.0, 10.0)
    }

    /// Creates a parameter with an explicit sample rate and ramp time.
    pub fn with_config(initial: f32, sample_rate: f32, transition_time_ms: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            increment: 0.0,
            samples_remaining: 0,
            sample_rate,
            transition_time_ms,
        }
    }

    /// Sets a new target and starts a ramp toward it.
    ///
    /// Setting the same target again does not restart the ramp.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() < 1e-9 {
            return;
        }
        self.target = target;

        let samples = ms_to_samples(self.transition_time_ms, self.sample_rate) as u32;
        if samples == 0 {
            self.snap_to_target();
        } else {
            self.increment = (target - self.current) / samples as f32;
            self.samples_remaining = samples;
        }
    }

    /// Jumps to `value` with no ramp.
    pub fn set_immediate(&mut self, value: f32) {
        self.target = value;
        self.snap_to_target();
    }

    /// Updates the sample rate used for subsequent ramps.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    /// Updates the ramp time used for subsequent ramps.
    pub fn set_transition_time_ms(&mut self, time_ms: f32) {
        self.transition_time_ms = time_ms.max(0.0);
    }

    /// Ramp time in milliseconds.
    pub fn transition_time_ms(&self) -> f32 {
        self.transition_time_ms
    }

    /// Advances one sample and returns the new value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        if self.samples_remaining > 0 {
            self.current += self.increment;
            self.samples_remaining -= 1;
            if self.samples_remaining == 0 {
                // Exact landing regardless of accumulated rounding.
                self.current = self.target;
            }
        }
        self.current
    }

    /// Current value without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// `true` once the ramp has finished.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.samples_remaining == 0
    }

    /// Ends any ramp in progress at the target.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }
}

impl Default for LinearSmoothedParam {
    fn default() -> Self {
        Self::new(0.0)
    }
}
