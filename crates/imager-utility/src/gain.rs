//! Ramped output gain.

use imager_core::{LinearSmoothedParam, db_to_linear};

/// Default ramp time for gain changes, in milliseconds.
pub const DEFAULT_RAMP_MS: f32 = 30.0;

/// Decibel gain applied through a linear ramp.
///
/// The target is refreshed every block; a target equal to the current one
/// does not restart the ramp. At unity once settled the stage is bit-exact.
#[derive(Debug, Clone)]
pub struct GainStage {
    gain: LinearSmoothedParam,
}

impl GainStage {
    /// Unity gain with the given sample rate and ramp time.
    pub fn new(sample_rate: f32, ramp_ms: f32) -> Self {
        Self {
            gain: LinearSmoothedParam::with_config(1.0, sample_rate, ramp_ms),
        }
    }

    /// Sets the target level in decibels.
    pub fn set_gain_db(&mut self, db: f32) {
        self.gain.set_target(db_to_linear(db));
    }

    /// Jumps straight to `db` with no ramp.
    pub fn set_gain_db_immediate(&mut self, db: f32) {
        self.gain.set_immediate(db_to_linear(db));
    }

    /// Updates the sample rate for subsequent ramps.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.gain.set_sample_rate(sample_rate);
    }

    /// Updates the ramp time for subsequent ramps.
    pub fn set_ramp_ms(&mut self, ramp_ms: f32) {
        self.gain.set_transition_time_ms(ramp_ms);
    }

    /// Current linear gain.
    pub fn current(&self) -> f32 {
        self.gain.get()
    }

    /// `true` once the ramp has finished.
    pub fn is_settled(&self) -> bool {
        self.gain.is_settled()
    }

    /// Ends any ramp in progress.
    pub fn reset(&mut self) {
        self.gain.snap_to_target();
    }

    /// Applies the gain to every channel, advancing the ramp once per frame.
    pub fn process(&mut self, block: &mut [&mut [f32]]) {
        if self.gain.is_settled() {
            let g = self.gain.get();
            if g == 1.0 {
                return;
            }
            for channel in block.iter_mut() {
                for sample in channel.iter_mut() {
                    *sample *= g;
                }
            }
            return;
        }

        let len = block.iter().map(|ch| ch.len()).min().unwrap_or(0);
        for i in 0..len {
            let g = self.gain.advance();
            for channel in block.iter_mut() {
                channel[i] *= g;
            }
        }
    }
}

impl Default for GainStage {
    fn default() -> Self {
        Self::new(44100.0, DEFAULT_RAMP_MS)
    }
}
