//! Stateless channel operations applied in place to a block.
//!
//! Blocks are `&mut [&mut [f32]]`, one slice per channel. Operations that
//! need a stereo pair are no-ops on anything else.

use imager_core::mono_sum;

/// Channel routing applied after phase inversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelMode {
    /// Both channels pass unchanged.
    #[default]
    Stereo = 0,
    /// Left only; right is silenced.
    Left = 1,
    /// Right only; left is silenced.
    Right = 2,
    /// Left and right exchanged.
    Swap = 3,
}

impl ChannelMode {
    /// Display labels, indexed by discriminant.
    pub const LABELS: &'static [&'static str] = &["Stereo", "Left", "Right", "Swap"];

    /// Maps a choice index to a mode. Out-of-range indices fall back to
    /// [`ChannelMode::Stereo`].
    pub fn from_index(index: f32) -> Self {
        match index.round() as i32 {
            1 => Self::Left,
            2 => Self::Right,
            3 => Self::Swap,
            _ => Self::Stereo,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

/// Splits a block into its left and right channels when it has exactly two.
#[inline]
pub fn stereo_pair<'a>(block: &'a mut [&mut [f32]]) -> Option<(&'a mut [f32], &'a mut [f32])> {
    match block {
        [left, right] => Some((&mut **left, &mut **right)),
        _ => None,
    }
}

/// Negates every sample.
#[inline]
pub fn invert(channel: &mut [f32]) {
    for sample in channel.iter_mut() {
        *sample = -*sample;
    }
}

/// Zeroes every sample.
#[inline]
pub fn clear(channel: &mut [f32]) {
    channel.fill(0.0);
}

/// Zeroes every channel of a block.
pub fn clear_block(block: &mut [&mut [f32]]) {
    for channel in block.iter_mut() {
        clear(channel);
    }
}

/// Exchanges the contents of two channels.
///
/// Only the common length is swapped.
#[inline]
pub fn swap(left: &mut [f32], right: &mut [f32]) {
    let len = left.len().min(right.len());
    left[..len].swap_with_slice(&mut right[..len]);
}

/// Applies a routing mode to a stereo pair.
pub fn route(left: &mut [f32], right: &mut [f32], mode: ChannelMode) {
    match mode {
        ChannelMode::Stereo => {}
        ChannelMode::Left => clear(right),
        ChannelMode::Right => clear(left),
        ChannelMode::Swap => swap(left, right),
    }
}

/// Replaces both channels of a stereo block with their mean.
///
/// No-op for mono blocks. Applying it twice changes nothing further.
pub fn downmix_to_mono(block: &mut [&mut [f32]]) {
    if let Some((left, right)) = stereo_pair(block) {
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let mid = mono_sum(*l, *r);
            *l = mid;
            *r = mid;
        }
    }
}
