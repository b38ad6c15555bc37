//! Bus layout negotiation and prepare-time configuration.

use crate::error::UtilityError;

/// Most channels the chain handles.
pub const MAX_CHANNELS: usize = imager_core::crossover::MAX_CHANNELS;

/// Input/output channel counts offered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    /// Input channels.
    pub input_channels: usize,
    /// Output channels.
    pub output_channels: usize,
}

impl BusLayout {
    /// One channel in, one out.
    pub const MONO: Self = Self::symmetric(1);
    /// Two channels in, two out.
    pub const STEREO: Self = Self::symmetric(2);

    /// Same channel count on both sides.
    pub const fn symmetric(channels: usize) -> Self {
        Self {
            input_channels: channels,
            output_channels: channels,
        }
    }

    /// Returns `Ok` for mono or stereo layouts with matching sides.
    pub fn validate(self) -> Result<(), UtilityError> {
        if is_layout_supported(self) {
            Ok(())
        } else {
            Err(UtilityError::UnsupportedLayout {
                input: self.input_channels,
                output: self.output_channels,
            })
        }
    }
}

/// Whether the chain can run on `layout`.
///
/// Accepts mono and stereo only, with input equal to output.
pub fn is_layout_supported(layout: BusLayout) -> bool {
    layout.input_channels == layout.output_channels
        && (1..=MAX_CHANNELS).contains(&layout.output_channels)
}

/// Everything the processor needs to size its state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Largest block the host will deliver.
    pub max_block_size: usize,
    /// Channels per block (1 or 2).
    pub num_channels: usize,
}

impl ProcessSpec {
    /// Creates a spec.
    pub const fn new(sample_rate: f32, max_block_size: usize, num_channels: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            num_channels,
        }
    }

    /// Checks layout, block size and sample rate.
    pub fn validate(&self) -> Result<(), UtilityError> {
        BusLayout::symmetric(self.num_channels).validate()?;
        if self.max_block_size == 0 {
            return Err(UtilityError::InvalidBlockSize(self.max_block_size));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(UtilityError::InvalidSampleRate(self.sample_rate));
        }
        Ok(())
    }
}
