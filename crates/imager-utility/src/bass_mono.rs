//! Bass mono: collapse only the low band to mono.
//!
//! ```text
//! block ──copy──────────────────────────► high ─► LR4 HP ─┐
//!   │                                                      ├─► + ─► block
//!   └─► downmix ─► block ──copy─► low ─► LR4 LP ───────────┘
//! ```
//!
//! LR4 low-pass + high-pass at the same cutoff sums to an allpass, so with
//! a stereo-identical input the output magnitude is flat. Preview mode drops
//! the high band to audition what is being mono'd.

use crate::ops::downmix_to_mono;
use imager_core::{CrossoverBand, LinkwitzRiley, ScratchBuffer};

/// Default crossover frequency in Hz.
pub const DEFAULT_CROSSOVER_HZ: f32 = 120.0;

/// Frequency-split mono stage with its own scratch storage.
#[derive(Debug, Clone)]
pub struct BassMonoSplitter {
    lowpass: LinkwitzRiley,
    highpass: LinkwitzRiley,
    high: ScratchBuffer,
    low: ScratchBuffer,
}

impl BassMonoSplitter {
    /// Creates an unprepared splitter. Call [`prepare`](Self::prepare)
    /// before processing.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            lowpass: LinkwitzRiley::new(CrossoverBand::Lowpass, sample_rate, DEFAULT_CROSSOVER_HZ),
            highpass: LinkwitzRiley::new(
                CrossoverBand::Highpass,
                sample_rate,
                DEFAULT_CROSSOVER_HZ,
            ),
            high: ScratchBuffer::new(),
            low: ScratchBuffer::new(),
        }
    }

    /// Configures both filters for `sample_rate` and sizes the scratch
    /// buffers. Clears filter history.
    pub fn prepare(&mut self, sample_rate: f32, num_channels: usize, max_block_size: usize) {
        self.lowpass.set_sample_rate(sample_rate);
        self.highpass.set_sample_rate(sample_rate);
        self.high.allocate(num_channels, max_block_size);
        self.low.allocate(num_channels, max_block_size);
        self.reset();
    }

    /// Frees the scratch buffers.
    pub fn release(&mut self) {
        self.high.release();
        self.low.release();
    }

    /// Clears filter history.
    pub fn reset(&mut self) {
        self.lowpass.reset();
        self.highpass.reset();
    }

    /// Retunes both bands together. History is kept.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.lowpass.set_cutoff(cutoff_hz);
        self.highpass.set_cutoff(cutoff_hz);
    }

    /// Current crossover frequency in Hz.
    pub fn cutoff(&self) -> f32 {
        self.lowpass.cutoff()
    }

    /// Largest block the scratch buffers hold.
    pub fn capacity(&self) -> usize {
        self.high.capacity()
    }

    /// Splits, mono's the low band and recombines in place.
    ///
    /// With `preview` set only the mono low band is written back. Blocks
    /// longer than [`capacity`](Self::capacity) or with more channels than
    /// prepared are left untouched.
    pub fn process(&mut self, block: &mut [&mut [f32]], preview: bool) {
        let len = block.first().map_or(0, |ch| ch.len());
        if len == 0 || len > self.capacity() || block.len() > self.high.num_channels() {
            return;
        }

        self.high.copy_from(block);
        downmix_to_mono(block);
        self.low.copy_from(block);

        for ch in 0..block.len() {
            self.highpass
                .process_channel(ch, self.high.channel_mut(ch, len));
            self.lowpass.process_channel(ch, self.low.channel_mut(ch, len));
        }

        self.low.copy_into(block);
        if !preview {
            self.high.add_into(block);
        }
    }
}
