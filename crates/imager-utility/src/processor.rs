//! The utility processor: the full chain behind a host-facing lifecycle.
//!
//! # Signal Flow
//!
//! ```text
//! Input
//!   → Phase invert (per channel)
//!   → Mode routing (Stereo / Left / Right / Swap)      stereo only
//!   → Stereo field (width or mid/side)                 stereo only
//!   → Mono collapse
//!   → Bass mono (LR4 split, mono low band)
//!   → Gain (30 ms linear ramp)
//!   → Balance                                          stereo only
//!   → Mute (zero and stop)
//!   → DC blocker
//! Output
//! ```
//!
//! # Lifecycle
//!
//! `new` → [`prepare`](UtilityProcessor::prepare) →
//! [`process`](UtilityProcessor::process)* →
//! [`release`](UtilityProcessor::release). Processing before `prepare` or
//! after `release` leaves the audio untouched.

use imager_core::DcBlocker;

use crate::balance;
use crate::bass_mono::BassMonoSplitter;
use crate::error::UtilityError;
use crate::gain::GainStage;
use crate::layout::{MAX_CHANNELS, ProcessSpec};
use crate::ops;
use crate::params::{ParamKey, ParamSnapshot, ParameterSet};
use crate::settings::ProcessorSettings;

/// Real-time stereo utility chain.
///
/// Owns all filter state and scratch storage. Parameters are read from the
/// shared [`ParameterSet`] once per `process` call.
///
/// ```rust
/// use imager_utility::{ParamKey, ParameterSet, ProcessSpec, UtilityProcessor};
///
/// let params = ParameterSet::new();
/// let mut processor = UtilityProcessor::new(params.clone());
/// processor.prepare(ProcessSpec::new(48000.0, 64, 2)).unwrap();
///
/// params.set(ParamKey::Width, 0.0);
/// let mut left = [1.0f32; 64];
/// let mut right = [-1.0f32; 64];
/// processor.process(&mut [&mut left, &mut right]);
/// assert_eq!(left, [0.0; 64]);
/// assert_eq!(right, [0.0; 64]);
/// ```
#[derive(Debug)]
pub struct UtilityProcessor {
    params: ParameterSet,
    settings: ProcessorSettings,
    spec: Option<ProcessSpec>,
    gain: GainStage,
    bass_mono: BassMonoSplitter,
    /// One per channel.
    dc_blockers: [DcBlocker; MAX_CHANNELS],
}

impl UtilityProcessor {
    /// Creates an unprepared processor with default settings.
    pub fn new(params: ParameterSet) -> Self {
        Self::with_settings(params, ProcessorSettings::default())
    }

    /// Creates an unprepared processor.
    pub fn with_settings(params: ParameterSet, settings: ProcessorSettings) -> Self {
        let settings = settings.sanitized();
        let sample_rate = 44100.0;
        Self {
            params,
            settings,
            spec: None,
            gain: GainStage::new(sample_rate, settings.gain_ramp_ms),
            bass_mono: BassMonoSplitter::new(sample_rate),
            dc_blockers: core::array::from_fn(|_| {
                DcBlocker::with_cutoff(sample_rate, settings.dc_cutoff_hz)
            }),
        }
    }

    /// The shared parameter handle.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Settings in effect.
    pub fn settings(&self) -> &ProcessorSettings {
        &self.settings
    }

    /// The configuration from the last successful `prepare`.
    pub fn spec(&self) -> Option<&ProcessSpec> {
        self.spec.as_ref()
    }

    /// `true` between `prepare` and `release`.
    pub fn is_prepared(&self) -> bool {
        self.spec.is_some()
    }

    /// Processing latency. The chain is sample-aligned.
    pub fn latency_samples(&self) -> usize {
        0
    }

    /// Configures sample-rate-dependent state and allocates scratch storage
    /// for `spec.max_block_size` frames.
    ///
    /// Must not run concurrently with `process`. Filter history is cleared
    /// and the gain jumps to its current target.
    pub fn prepare(&mut self, spec: ProcessSpec) -> Result<(), UtilityError> {
        if let Err(err) = spec.validate() {
            tracing::warn!(%err, "utility prepare rejected");
            return Err(err);
        }

        let sample_rate = spec.sample_rate;
        self.gain.set_sample_rate(sample_rate);
        self.gain.set_ramp_ms(self.settings.gain_ramp_ms);
        self.gain
            .set_gain_db_immediate(self.params.get(ParamKey::Gain));

        self.bass_mono
            .prepare(sample_rate, spec.num_channels, spec.max_block_size);
        self.bass_mono
            .set_cutoff(self.params.get(ParamKey::BassMonoCrossover));

        for blocker in &mut self.dc_blockers {
            *blocker = DcBlocker::with_cutoff(sample_rate, self.settings.dc_cutoff_hz);
        }

        self.spec = Some(spec);
        tracing::info!(
            sample_rate,
            max_block_size = spec.max_block_size,
            num_channels = spec.num_channels,
            "utility prepared"
        );
        Ok(())
    }

    /// Frees scratch storage. Subsequent `process` calls pass audio through
    /// until the next `prepare`.
    pub fn release(&mut self) {
        self.bass_mono.release();
        self.spec = None;
        tracing::info!("utility released");
    }

    /// Clears filter history and ends any gain ramp, keeping allocations.
    pub fn reset(&mut self) {
        self.bass_mono.reset();
        for blocker in &mut self.dc_blockers {
            blocker.reset();
        }
        self.gain
            .set_gain_db_immediate(self.params.get(ParamKey::Gain));
    }

    /// Processes one block in place.
    ///
    /// `block` holds one slice per channel, all the same length. Blocks
    /// longer than the prepared maximum run as consecutive sub-blocks.
    /// Never allocates or blocks.
    pub fn process(&mut self, block: &mut [&mut [f32]]) {
        let Some(spec) = self.spec else {
            return;
        };
        debug_assert_eq!(
            block.len(),
            spec.num_channels,
            "block channel count differs from prepare"
        );

        let channels = block.len().min(spec.num_channels);
        let block = &mut block[..channels];
        let len = block.iter().map(|ch| ch.len()).min().unwrap_or(0);
        if len == 0 {
            return;
        }

        let snapshot = self.params.snapshot();

        let mut start = 0;
        while start < len {
            let end = (start + spec.max_block_size).min(len);
            match &mut *block {
                [mono] => self.process_block(&mut [&mut mono[start..end]], &snapshot),
                [left, right] => self.process_block(
                    &mut [&mut left[start..end], &mut right[start..end]],
                    &snapshot,
                ),
                _ => {}
            }
            start = end;
        }
    }

    fn process_block(&mut self, block: &mut [&mut [f32]], p: &ParamSnapshot) {
        if p.invert_left
            && let Some(left) = block.first_mut()
        {
            ops::invert(left);
        }
        if p.invert_right
            && let Some(right) = block.get_mut(1)
        {
            ops::invert(right);
        }

        if let Some((left, right)) = ops::stereo_pair(block) {
            ops::route(left, right, p.mode);
            p.stereo_field().process(left, right);
        }

        if p.mono {
            ops::downmix_to_mono(block);
        }

        self.bass_mono.set_cutoff(p.crossover_hz);
        if p.bass_mono {
            self.bass_mono.process(block, p.bass_mono_preview);
        }

        self.gain.set_gain_db(p.gain_db);
        self.gain.process(block);

        if let Some((left, right)) = ops::stereo_pair(block) {
            balance::process(left, right, self.settings.pan_rule, p.balance);
        }

        if p.mute {
            ops::clear_block(block);
            return;
        }

        if p.dc {
            for (channel, blocker) in block.iter_mut().zip(self.dc_blockers.iter_mut()) {
                blocker.process_block(channel);
            }
        }
    }
}
