//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use imager_utility::{ParamKey, ParamKind, ParameterSet, ProcessorSettings};

use crate::error::ConfigError;
use crate::settings::SettingsConfig;
use crate::validation::{validate_param, validate_preset};

/// One value in a preset's `[params]` table.
///
/// Toggles may be written as booleans or `"On"`/`"Off"`, choices as their
/// label, floats as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `true` / `false`.
    Flag(bool),
    /// A plain value in the parameter's units.
    Number(f32),
    /// A choice or toggle label, or a number written as a string.
    Label(String),
}

impl ParamValue {
    /// The natural spelling of `value` for `key`: a flag for toggles, the
    /// label for choices, the number otherwise.
    pub fn from_plain(key: ParamKey, value: f32) -> Self {
        let desc = key.descriptor();
        match desc.kind {
            ParamKind::Toggle => Self::Flag(value >= 0.5),
            ParamKind::Choice(_) => desc
                .label(value)
                .map(|label| Self::Label(label.to_string()))
                .unwrap_or(Self::Number(value)),
            ParamKind::Float => Self::Number(value),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("On"),
            Self::Flag(false) => f.write_str("Off"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// A named set of parameter values plus processor settings.
///
/// Parameters missing from `params` keep their defaults when the preset is
/// applied.
///
/// # TOML Format
///
/// ```toml
/// name = "Bass Mono 120"
/// description = "Low end summed to mono below 120 Hz"
///
/// [params]
/// BassMono = true
/// BassMonoCrossover = 120.0
/// Mode = "Stereo"
///
/// [settings]
/// pan_rule = "equal_power"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameter values keyed by string id.
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,

    /// Processor settings.
    #[serde(default, skip_serializing_if = "SettingsConfig::is_default")]
    pub settings: SettingsConfig,
}

impl Preset {
    /// Create a new empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: BTreeMap::new(),
            settings: SettingsConfig::default(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set one parameter.
    pub fn with_param(mut self, id: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(id.into(), value.into());
        self
    }

    /// Replace the settings table.
    pub fn with_settings(mut self, settings: SettingsConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), name = %preset.name, "preset loaded");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::info!(path = %path.display(), name = %self.name, "preset saved");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Value stored for `id`, matched without regard to ASCII case.
    pub fn get(&self, id: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .map(|(_, value)| value)
    }

    /// Records every current value of `params`.
    pub fn capture(name: impl Into<String>, params: &ParameterSet) -> Self {
        let mut preset = Self::new(name);
        for (key, value) in params.values() {
            preset
                .params
                .insert(key.string_id().to_string(), ParamValue::from_plain(key, value));
        }
        preset
    }

    /// Validates the preset, resets `params` to defaults and writes every
    /// stored value.
    ///
    /// Nothing is written when validation fails.
    pub fn apply(&self, params: &ParameterSet) -> Result<(), ConfigError> {
        validate_preset(self)?;

        params.reset_to_defaults();
        for (id, value) in &self.params {
            let (key, plain) = validate_param(id, value)?;
            params.set(key, plain);
        }
        tracing::debug!(name = %self.name, count = self.params.len(), "preset applied");
        Ok(())
    }

    /// Runtime settings from the `[settings]` table.
    pub fn processor_settings(&self) -> Result<ProcessorSettings, ConfigError> {
        Ok(self.settings.to_processor_settings()?)
    }

    /// Number of stored parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `true` when no parameter is stored.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
