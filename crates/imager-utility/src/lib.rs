//! Imager Utility - real-time stereo utility chain
//!
//! A fixed chain for stereo housekeeping: polarity, routing, width and
//! mid/side, mono and bass-mono collapse, gain, balance, mute and DC
//! removal. Hosts drive it through [`UtilityProcessor`]; controls write to a
//! shared [`ParameterSet`] from any thread.
//!
//! ```rust
//! use imager_utility::{ParamKey, ParameterSet, ProcessSpec, UtilityProcessor};
//!
//! let params = ParameterSet::new();
//! let mut processor = UtilityProcessor::new(params.clone());
//! processor.prepare(ProcessSpec::new(44100.0, 512, 2))?;
//!
//! params.set_bool(ParamKey::BassMono, true);
//! params.set(ParamKey::BassMonoCrossover, 150.0);
//!
//! let mut left = vec![0.0f32; 512];
//! let mut right = vec![0.0f32; 512];
//! processor.process(&mut [&mut left, &mut right]);
//! # Ok::<(), imager_utility::UtilityError>(())
//! ```
//!
//! ## Modules
//!
//! - [`params`] - parameter table, atomic storage, per-block snapshots
//! - [`ops`] - invert, routing, swap, downmix
//! - [`stereo_field`] - width and mid/side transforms
//! - [`bass_mono`] - LR4 split with a mono low band
//! - [`gain`], [`balance`] - output level and pan law
//! - [`processor`] - the chain and its lifecycle
//! - [`layout`] - bus negotiation

pub mod balance;
pub mod bass_mono;
pub mod error;
pub mod gain;
pub mod layout;
pub mod ops;
pub mod params;
pub mod processor;
pub mod settings;
pub mod stereo_field;

pub use imager_core::{
    ParamDescriptor, ParamId, ParamKind, ParamScale, ParamUnit, db_to_linear, linear_to_db,
};

pub use balance::PanRule;
pub use bass_mono::BassMonoSplitter;
pub use error::UtilityError;
pub use gain::GainStage;
pub use layout::{BusLayout, MAX_CHANNELS, ProcessSpec, is_layout_supported};
pub use ops::ChannelMode;
pub use params::{DESCRIPTORS, PARAM_COUNT, ParamKey, ParamSnapshot, ParameterSet};
pub use processor::UtilityProcessor;
pub use settings::ProcessorSettings;
pub use stereo_field::StereoField;
