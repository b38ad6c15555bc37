//! Property-based tests for imager-core DSP primitives.
//!
//! Filter stability, crossover reconstruction, ramp convergence and
//! parameter quantization over randomized inputs.

use proptest::prelude::*;
use imager_core::{
    Biquad, CrossoverBand, DcBlocker, LinearSmoothedParam, LinkwitzRiley, ParamDescriptor,
    ParamScale, ParamUnit, highpass_coefficients, lowpass_coefficients, ms_to_samples,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Low-pass and high-pass biquads stay finite for any cutoff in the
    /// audible range and any bounded input.
    #[test]
    fn biquad_stability(
        freq in 20.0f32..20000.0f32,
        q in 0.1f32..10.0f32,
        highpass in any::<bool>(),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut biquad = Biquad::new();
        biquad.apply(if highpass {
            highpass_coefficients(freq, q, 48000.0)
        } else {
            lowpass_coefficients(freq, q, 48000.0)
        });

        for &sample in &input {
            let out = biquad.process(sample);
            prop_assert!(out.is_finite(), "freq={} q={} produced {}", freq, q, out);
        }
    }

    /// LR4 low + high never exceeds the input peak by more than the small
    /// overshoot of an allpass response, for any cutoff in the bass-mono range.
    #[test]
    fn crossover_sum_is_bounded(
        cutoff in 20.0f32..500.0f32,
        input in prop::collection::vec(-1.0f32..=1.0f32, 256..1024),
    ) {
        let mut lp = LinkwitzRiley::new(CrossoverBand::Lowpass, 48000.0, cutoff);
        let mut hp = LinkwitzRiley::new(CrossoverBand::Highpass, 48000.0, cutoff);

        for &x in &input {
            let y = lp.process(0, x) + hp.process(0, x);
            prop_assert!(y.is_finite());
            prop_assert!(y.abs() < 4.0, "cutoff={} x={} y={}", cutoff, x, y);
        }
    }

    /// Retuning the crossover every block keeps it stable.
    #[test]
    fn crossover_retune_every_block(
        cutoffs in prop::collection::vec(20.0f32..500.0f32, 1..32),
    ) {
        let mut lp = LinkwitzRiley::new(CrossoverBand::Lowpass, 44100.0, 120.0);
        let mut block = [0.0f32; 64];
        for (i, &cutoff) in cutoffs.iter().enumerate() {
            lp.set_cutoff(cutoff);
            for (j, s) in block.iter_mut().enumerate() {
                *s = if (i * 64 + j) % 50 < 25 { 0.8 } else { -0.8 };
            }
            lp.process_channel(1, &mut block);
            prop_assert!(block.iter().all(|s| s.is_finite() && s.abs() < 4.0));
        }
    }

    /// The DC blocker output stays bounded for bounded input.
    #[test]
    fn dc_blocker_bounded(
        sample_rate in 8000.0f32..192000.0f32,
        input in prop::collection::vec(-1.0f32..=1.0f32, 1..2048),
    ) {
        let mut blocker = DcBlocker::new(sample_rate);
        for &x in &input {
            let y = blocker.process(x);
            prop_assert!(y.is_finite() && y.abs() <= 2.0 + 1e-3, "y={}", y);
        }
    }

    /// A linear ramp lands exactly on its target after the transition time.
    #[test]
    fn linear_ramp_lands_on_target(
        initial in -50.0f32..50.0f32,
        target in -50.0f32..50.0f32,
        ramp_ms in 1.0f32..100.0f32,
    ) {
        let mut param = LinearSmoothedParam::with_config(initial, 48000.0, ramp_ms);
        param.set_target(target);
        let samples = ms_to_samples(ramp_ms, 48000.0) as usize;
        for _ in 0..samples {
            param.advance();
        }
        prop_assert!(param.is_settled());
        prop_assert!((param.get() - target).abs() < 1e-6);
    }

    /// Quantizing is idempotent and always lands inside the range.
    #[test]
    fn quantize_idempotent(value in -1000.0f32..1000.0f32) {
        let desc = ParamDescriptor::float("Width", "Width", ParamUnit::Percent, 0.0, 400.0, 100.0)
            .with_step(1.0)
            .with_scale(ParamScale::Power(2.5));
        let once = desc.quantize(value);
        prop_assert!((0.0..=400.0).contains(&once));
        prop_assert_eq!(desc.quantize(once), once);
    }

    /// normalize and denormalize are inverse over the whole range.
    #[test]
    fn power_scale_roundtrip(normalized in 0.0f32..=1.0f32) {
        let desc = ParamDescriptor::float("Width", "Width", ParamUnit::Percent, 0.0, 400.0, 100.0)
            .with_scale(ParamScale::Power(2.5));
        let plain = desc.denormalize(normalized);
        prop_assert!((desc.normalize(plain) - normalized).abs() < 1e-3);
    }
}
