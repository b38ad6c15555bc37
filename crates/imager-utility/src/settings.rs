//! Construction-time processor settings.
//!
//! These are not automatable parameters; they are fixed for the lifetime of
//! a [`UtilityProcessor`](crate::UtilityProcessor) and read at prepare time.

use imager_core::DcBlocker;

use crate::balance::PanRule;
use crate::gain::DEFAULT_RAMP_MS;

/// Tuning that sits outside the parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessorSettings {
    /// Balance law.
    pub pan_rule: PanRule,
    /// Gain ramp time in milliseconds.
    pub gain_ramp_ms: f32,
    /// DC blocker cutoff in Hz.
    pub dc_cutoff_hz: f32,
}

impl ProcessorSettings {
    /// Replaces out-of-range values with defaults: a negative or non-finite
    /// ramp becomes 30 ms, a non-positive or non-finite cutoff becomes 10 Hz.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            pan_rule: self.pan_rule,
            gain_ramp_ms: if self.gain_ramp_ms.is_finite() && self.gain_ramp_ms >= 0.0 {
                self.gain_ramp_ms
            } else {
                defaults.gain_ramp_ms
            },
            dc_cutoff_hz: if self.dc_cutoff_hz.is_finite() && self.dc_cutoff_hz > 0.0 {
                self.dc_cutoff_hz
            } else {
                defaults.dc_cutoff_hz
            },
        }
    }
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            pan_rule: PanRule::EqualPower,
            gain_ramp_ms: DEFAULT_RAMP_MS,
            dc_cutoff_hz: DcBlocker::DEFAULT_CUTOFF_HZ,
        }
    }
}
