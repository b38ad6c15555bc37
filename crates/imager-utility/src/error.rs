//! Error types for the utility processor.

use thiserror::Error;

/// Errors reported by [`UtilityProcessor`](crate::UtilityProcessor) and
/// [`ParameterSet`](crate::ParameterSet).
///
/// None of these can occur inside `process`; they are raised at prepare
/// time or by string-keyed parameter access from the control side.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UtilityError {
    /// The bus layout is not mono or stereo with matching input and output.
    #[error("unsupported bus layout: {input} in, {output} out (need 1 or 2, matching)")]
    UnsupportedLayout {
        /// Input channel count.
        input: usize,
        /// Output channel count.
        output: usize,
    },

    /// No parameter with this string id exists.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// A value string could not be parsed for the named parameter.
    #[error("invalid value '{value}' for parameter '{param}'")]
    InvalidValue {
        /// Parameter string id.
        param: String,
        /// The rejected input.
        value: String,
    },

    /// The maximum block size is zero.
    #[error("invalid block size: {0}")]
    InvalidBlockSize(usize),

    /// The sample rate is not a positive finite number.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f32),
}
