//! Imager Core - DSP primitives for the stereo utility chain
//!
//! The building blocks the processing chain in `imager-utility` is made of,
//! designed for real-time use with zero allocation on the audio path.
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR section with RBJ cookbook coefficients
//! - [`LinkwitzRiley`] - 4th-order Linkwitz-Riley crossover band
//! - [`DcBlocker`] - First-order DC-removing high-pass
//!
//! ## Parameters
//!
//! - [`LinearSmoothedParam`] - Linear ramps for click-free gain changes
//! - [`ParamDescriptor`] - Ranges, step grids, labels and normalization curves
//!
//! ## Buffers
//!
//! - [`ScratchBuffer`] - Preallocated multi-channel working storage
//!
//! ## Utilities
//!
//! - [`db_to_linear`], [`linear_to_db`], [`flush_denormal`], [`mono_sum`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! imager-core = { version = "0.1", default-features = false }
//! ```
//!
//! [`ScratchBuffer`] still needs an allocator (`alloc`).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod buffer;
pub mod crossover;
pub mod dc_blocker;
pub mod math;
pub mod param;
pub mod param_info;

pub use biquad::{Biquad, Coefficients, highpass_coefficients, lowpass_coefficients};
pub use buffer::ScratchBuffer;
pub use crossover::{CrossoverBand, LinkwitzRiley};
pub use dc_blocker::DcBlocker;
pub use math::{db_to_linear, flush_denormal, linear_to_db, mono_sum, ms_to_samples};
pub use param::LinearSmoothedParam;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamKind, ParamScale, ParamUnit};
