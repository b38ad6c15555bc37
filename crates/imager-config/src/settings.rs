//! The `[settings]` table of a preset.

use imager_utility::{PanRule, ProcessorSettings};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationResult};

/// Serialized form of [`ProcessorSettings`].
///
/// ```toml
/// [settings]
/// pan_rule = "balanced"
/// gain_ramp_ms = 50.0
/// dc_cutoff_hz = 5.0
/// ```
///
/// Every field is optional and falls back to the processor default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// `"equal_power"` or `"balanced"`.
    pub pan_rule: String,
    /// Gain ramp time in milliseconds.
    pub gain_ramp_ms: f32,
    /// DC blocker cutoff in Hz.
    pub dc_cutoff_hz: f32,
}

impl SettingsConfig {
    /// Serialized form of `settings`.
    pub fn from_processor_settings(settings: &ProcessorSettings) -> Self {
        Self {
            pan_rule: settings.pan_rule.name().to_string(),
            gain_ramp_ms: settings.gain_ramp_ms,
            dc_cutoff_hz: settings.dc_cutoff_hz,
        }
    }

    /// Checks every field and builds the runtime settings.
    pub fn to_processor_settings(&self) -> ValidationResult<ProcessorSettings> {
        let mut errors = Vec::new();

        let pan_rule = PanRule::from_name(&self.pan_rule).unwrap_or_else(|| {
            errors.push(ValidationError::InvalidSetting {
                field: "pan_rule".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.pan_rule,
                    PanRule::NAMES.join(", ")
                ),
            });
            PanRule::default()
        });

        if !(self.gain_ramp_ms.is_finite() && (0.0..=1000.0).contains(&self.gain_ramp_ms)) {
            errors.push(ValidationError::InvalidSetting {
                field: "gain_ramp_ms".to_string(),
                reason: format!("{} is outside 0 to 1000 ms", self.gain_ramp_ms),
            });
        }

        if !(self.dc_cutoff_hz.is_finite() && (1.0..=40.0).contains(&self.dc_cutoff_hz)) {
            errors.push(ValidationError::InvalidSetting {
                field: "dc_cutoff_hz".to_string(),
                reason: format!("{} is outside 1 to 40 Hz", self.dc_cutoff_hz),
            });
        }

        ValidationError::collect(errors)?;
        Ok(ProcessorSettings {
            pan_rule,
            gain_ramp_ms: self.gain_ramp_ms,
            dc_cutoff_hz: self.dc_cutoff_hz,
        })
    }

    /// `true` when every field holds the processor default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self::from_processor_settings(&ProcessorSettings::default())
    }
}
