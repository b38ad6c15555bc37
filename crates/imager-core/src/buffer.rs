//! Preallocated multi-channel scratch storage.
//!
//! [`ScratchBuffer`] is sized once (outside the audio thread) and then
//! reused block after block. Copy and accumulate calls take the live block
//! length, so no call on the processing path ever reallocates.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A set of equally sized channel buffers.
#[derive(Debug, Clone, Default)]
pub struct ScratchBuffer {
    channels: Vec<Vec<f32>>,
    capacity: usize,
}

impl ScratchBuffer {
    /// An empty buffer holding no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates zeroed storage for `channels` × `capacity` samples,
    /// replacing whatever was held before.
    pub fn allocate(&mut self, channels: usize, capacity: usize) {
        self.channels = (0..channels).map(|_| vec![0.0; capacity]).collect();
        self.capacity = capacity;
        #[cfg(feature = "tracing")]
        tracing::debug!("scratch_allocate: {channels} ch x {capacity} samples");
    }

    /// Frees all storage.
    pub fn release(&mut self) {
        self.channels = Vec::new();
        self.capacity = 0;
    }

    /// Number of channels allocated.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` when nothing is allocated.
    pub fn is_empty(&self) -> bool {
        self.capacity == 0 || self.channels.is_empty()
    }

    /// The first `len` samples of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel` or `len` exceeds the allocation.
    #[inline]
    pub fn channel(&self, channel: usize, len: usize) -> &[f32] {
        &self.channels[channel][..len]
    }

    /// Mutable view of the first `len` samples of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel` or `len` exceeds the allocation.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize, len: usize) -> &mut [f32] {
        &mut self.channels[channel][..len]
    }

    /// Copies each source channel into the matching scratch channel.
    ///
    /// # Panics
    ///
    /// Panics if a source channel is longer than the capacity or there are
    /// more source channels than allocated ones.
    pub fn copy_from<S: AsRef<[f32]>>(&mut self, source: &[S]) {
        for (dst, src) in self.channels.iter_mut().zip(source) {
            let src = src.as_ref();
            dst[..src.len()].copy_from_slice(src);
        }
    }

    /// Adds the first `dest[ch].len()` samples of each scratch channel into
    /// the matching destination channel.
    pub fn add_into<D: AsMut<[f32]>>(&self, dest: &mut [D]) {
        for (src, dst) in self.channels.iter().zip(dest.iter_mut()) {
            let dst = dst.as_mut();
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d += *s;
            }
        }
    }

    /// Overwrites each destination channel with the matching scratch channel.
    pub fn copy_into<D: AsMut<[f32]>>(&self, dest: &mut [D]) {
        for (src, dst) in self.channels.iter().zip(dest.iter_mut()) {
            let dst = dst.as_mut();
            let len = dst.len();
            dst.copy_from_slice(&src[..len]);
        }
    }

    /// Zeroes every sample.
    pub fn clear(&mut self) {
        for channel in &mut self.channels {
            channel.fill(0.0);
        }
    }
}
