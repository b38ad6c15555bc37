//! Preset validation against the parameter table.
//!
//! Every key in a preset's `[params]` table must name one of the utility
//! parameters, and every value must fit that parameter's domain: numbers
//! inside the range, labels from the parameter's label set, booleans only
//! for toggles.
//!
//! # Example
//!
//! ```rust
//! use imager_config::{Preset, validate_preset};
//!
//! let preset = Preset::new("Wide").with_param("Width", 180.0);
//! assert!(validate_preset(&preset).is_ok());
//!
//! let preset = Preset::new("Broken").with_param("Width", 900.0);
//! assert!(validate_preset(&preset).is_err());
//! ```

use imager_utility::{ParamKey, ParamKind};
use thiserror::Error;

use crate::preset::{ParamValue, Preset};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// No parameter with this id.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Numeric value outside the parameter range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Parameter id.
        param: String,
        /// The rejected value.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Value of the wrong shape for the parameter.
    #[error("invalid value for parameter '{param}': {reason}")]
    InvalidValue {
        /// Parameter id.
        param: String,
        /// What was wrong.
        reason: String,
    },

    /// A `[settings]` field is unusable.
    #[error("invalid setting '{field}': {reason}")]
    InvalidSetting {
        /// Field name.
        field: String,
        /// What was wrong.
        reason: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// `Ok` for no errors, the error itself for one, [`Multiple`](Self::Multiple)
    /// otherwise.
    pub fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks one `id = value` entry and resolves it to a key and plain value.
///
/// ```rust
/// use imager_config::{ParamValue, validate_param};
/// use imager_utility::ParamKey;
///
/// let (key, value) = validate_param("Mode", &ParamValue::from("Swap")).unwrap();
/// assert_eq!(key, ParamKey::Mode);
/// assert_eq!(value, 3.0);
/// ```
pub fn validate_param(id: &str, value: &ParamValue) -> ValidationResult<(ParamKey, f32)> {
    let key = ParamKey::from_string_id(id)
        .ok_or_else(|| ValidationError::UnknownParameter(id.to_string()))?;
    let desc = key.descriptor();
    let invalid = |reason: String| ValidationError::InvalidValue {
        param: desc.string_id.to_string(),
        reason,
    };

    let plain = match value {
        ParamValue::Flag(on) => match desc.kind {
            ParamKind::Toggle => {
                if *on {
                    1.0
                } else {
                    0.0
                }
            }
            _ => return Err(invalid("booleans are only valid for toggles".to_string())),
        },
        ParamValue::Number(number) => {
            if !number.is_finite() {
                return Err(invalid(format!("{number} is not a finite number")));
            }
            if *number < desc.min || *number > desc.max {
                return Err(ValidationError::OutOfRange {
                    param: desc.string_id.to_string(),
                    value: *number,
                    min: desc.min,
                    max: desc.max,
                });
            }
            *number
        }
        ParamValue::Label(label) => match desc.kind {
            ParamKind::Float => {
                // Numbers written as strings, e.g. `Gain = "-6"`.
                let number = label
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| invalid(format!("'{label}' is not a number")))?;
                return validate_param(id, &ParamValue::Number(number));
            }
            ParamKind::Toggle => desc
                .value_for_label(label)
                .ok_or_else(|| invalid(format!("'{label}' is not On or Off")))?,
            ParamKind::Choice(labels) => desc.value_for_label(label).ok_or_else(|| {
                invalid(format!("'{label}' is not one of {}", labels.join(", ")))
            })?,
        },
    };

    Ok((key, desc.quantize(plain)))
}

/// Validates every parameter and the settings table, reporting all
/// problems at once.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors: Vec<ValidationError> = preset
        .params
        .iter()
        .filter_map(|(id, value)| validate_param(id, value).err())
        .collect();

    match preset.settings.to_processor_settings() {
        Err(ValidationError::Multiple(inner)) => errors.extend(inner),
        Err(err) => errors.push(err),
        Ok(_) => {}
    }

    ValidationError::collect(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_range_pass() {
        let (key, value) = validate_param("Gain", &ParamValue::Number(-6.4)).unwrap();
        assert_eq!(key, ParamKey::Gain);
        assert_eq!(value, -6.0);
    }

    #[test]
    fn out_of_range_reported() {
        let err = validate_param("BassMonoCrossover", &ParamValue::Number(800.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                param: "BassMonoCrossover".to_string(),
                value: 800.0,
                min: 20.0,
                max: 500.0,
            }
        );
    }

    #[test]
    fn unknown_id_reported() {
        assert_eq!(
            validate_param("Chorus", &ParamValue::Number(1.0)),
            Err(ValidationError::UnknownParameter("Chorus".to_string()))
        );
    }

    #[test]
    fn flags_only_for_toggles() {
        assert_eq!(
            validate_param("Mute", &ParamValue::Flag(true)),
            Ok((ParamKey::Mute, 1.0))
        );
        assert!(matches!(
            validate_param("Width", &ParamValue::Flag(true)),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn labels_for_choices_and_toggles() {
        assert_eq!(
            validate_param("mode", &ParamValue::from("left")),
            Ok((ParamKey::Mode, 1.0))
        );
        assert_eq!(
            validate_param("DC", &ParamValue::from("On")),
            Ok((ParamKey::Dc, 1.0))
        );
        let err = validate_param("Mode", &ParamValue::from("Center")).unwrap_err();
        assert!(err.to_string().contains("Stereo, Left, Right, Swap"), "{err}");
    }

    #[test]
    fn numeric_strings_for_floats() {
        assert_eq!(
            validate_param("Gain", &ParamValue::from("-6")),
            Ok((ParamKey::Gain, -6.0))
        );
        assert!(matches!(
            validate_param("Gain", &ParamValue::from("loud")),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            validate_param("Gain", &ParamValue::from("75")),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn preset_errors_collected() {
        let preset = Preset::new("Bad")
            .with_param("Width", 1000.0)
            .with_param("Flanger", 1.0)
            .with_param("Gain", -3.0);
        match validate_preset(&preset) {
            Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected two errors, got {other:?}"),
        }
    }

    #[test]
    fn collect_shapes() {
        assert_eq!(ValidationError::collect(Vec::new()), Ok(()));
        let one = ValidationError::UnknownParameter("x".to_string());
        assert_eq!(ValidationError::collect(vec![one.clone()]), Err(one));
    }
}
