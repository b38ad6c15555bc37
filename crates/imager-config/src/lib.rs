//! Preset and settings management for the imager stereo utility.
//!
//! # Features
//!
//! - **Presets**: load and save parameter maps as TOML
//! - **Validation**: every value checked against the parameter descriptors
//! - **Settings**: pan law, gain ramp and DC cutoff in a `[settings]` table
//! - **Paths**: platform-specific preset and config directories
//! - **Factory Presets**: built-in starting points
//!
//! # Example
//!
//! ```rust
//! use imager_config::Preset;
//! use imager_utility::{ParamKey, ParameterSet};
//!
//! let preset = Preset::new("Narrow")
//!     .with_param("Width", 50.0)
//!     .with_param("BassMono", true);
//!
//! let params = ParameterSet::new();
//! preset.apply(&params).unwrap();
//! assert_eq!(params.get(ParamKey::Width), 50.0);
//!
//! let toml = preset.to_toml().unwrap();
//! assert_eq!(Preset::from_toml(&toml).unwrap(), preset);
//! ```

mod error;
mod preset;
mod settings;

/// Platform-specific paths for presets and configuration.
#[cfg(feature = "std")]
pub mod paths;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::{ConfigError, FileOp};
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
#[cfg(feature = "std")]
pub use paths::{
    ensure_user_presets_dir, find_preset, list_all_presets, list_system_presets,
    list_user_presets, load_preset, preset_name_from_path, system_presets_dir, user_config_dir,
    user_presets_dir,
};
pub use preset::{ParamValue, Preset};
pub use settings::SettingsConfig;
pub use validation::{ValidationError, ValidationResult, validate_param, validate_preset};
