//! Integration tests for imager-core DSP primitives.
//!
//! Signal-level measurements: sine sweeps through the biquad and crossover
//! bands, DC removal, and gain ramp timing against the converted dB values.

use imager_core::{
    Biquad, CrossoverBand, DcBlocker, LinearSmoothedParam, LinkwitzRiley, ScratchBuffer,
    db_to_linear, highpass_coefficients, lowpass_coefficients,
};

const SAMPLE_RATE: f32 = 48000.0;
const TAU: f32 = core::f32::consts::TAU;

/// Generate a sine wave buffer at the given frequency and sample rate.
fn generate_sine(freq_hz: f32, sample_rate: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|n| libm::sinf(TAU * freq_hz * n as f32 / sample_rate))
        .collect()
}

/// Measure RMS amplitude of a signal buffer.
fn rms(signal: &[f32]) -> f32 {
    let sum_sq: f32 = signal.iter().map(|&s| s * s).sum();
    libm::sqrtf(sum_sq / signal.len() as f32)
}

/// Convert linear amplitude to dB.
fn to_db(linear: f32) -> f32 {
    20.0 * libm::log10f(linear.max(1e-10))
}

// ============================================================================
// 1. Biquad
// ============================================================================

fn measure_biquad_response(biquad: &mut Biquad, freq_hz: f32) -> f32 {
    let num_samples = 4800;
    let settle_samples = 2400;
    let input = generate_sine(freq_hz, SAMPLE_RATE, num_samples);
    let mut output = input.clone();
    biquad.clear();
    biquad.process_block(&mut output);
    to_db(rms(&output[settle_samples..]) / rms(&input[settle_samples..]))
}

#[test]
fn biquad_lowpass_frequency_response() {
    let mut biquad = Biquad::new();
    biquad.apply(lowpass_coefficients(1000.0, 0.707, SAMPLE_RATE));

    for &freq in &[50.0, 100.0, 200.0] {
        let gain_db = measure_biquad_response(&mut biquad, freq);
        assert!(gain_db.abs() < 1.0, "{freq} Hz should pass, got {gain_db:.1} dB");
    }
    for &freq in &[8000.0, 16000.0] {
        let gain_db = measure_biquad_response(&mut biquad, freq);
        assert!(gain_db < -20.0, "{freq} Hz should be cut, got {gain_db:.1} dB");
    }
}

#[test]
fn biquad_highpass_frequency_response() {
    let mut biquad = Biquad::new();
    biquad.apply(highpass_coefficients(1000.0, 0.707, SAMPLE_RATE));

    for &freq in &[8000.0, 16000.0] {
        let gain_db = measure_biquad_response(&mut biquad, freq);
        assert!(gain_db.abs() < 1.0, "{freq} Hz should pass, got {gain_db:.1} dB");
    }
    let gain_db = measure_biquad_response(&mut biquad, 100.0);
    assert!(gain_db < -20.0, "100 Hz should be cut, got {gain_db:.1} dB");
}

// ============================================================================
// 2. Linkwitz-Riley crossover
// ============================================================================

fn measure_band(band: CrossoverBand, cutoff: f32, freq_hz: f32) -> f32 {
    let mut filter = LinkwitzRiley::new(band, SAMPLE_RATE, cutoff);
    let input = generate_sine(freq_hz, SAMPLE_RATE, 9600);
    let mut output = input.clone();
    filter.process_channel(0, &mut output);
    to_db(rms(&output[4800..]) / rms(&input[4800..]))
}

#[test]
fn crossover_slopes_are_fourth_order() {
    // Three octaves away a 24 dB/oct slope is far past -40 dB.
    let lp = measure_band(CrossoverBand::Lowpass, 1000.0, 8000.0);
    let hp = measure_band(CrossoverBand::Highpass, 1000.0, 125.0);
    assert!(lp < -40.0, "lowpass stopband {lp:.1} dB");
    assert!(hp < -40.0, "highpass stopband {hp:.1} dB");

    let lp_pass = measure_band(CrossoverBand::Lowpass, 1000.0, 100.0);
    let hp_pass = measure_band(CrossoverBand::Highpass, 1000.0, 10000.0);
    assert!(lp_pass.abs() < 0.5, "lowpass passband {lp_pass:.2} dB");
    assert!(hp_pass.abs() < 0.5, "highpass passband {hp_pass:.2} dB");
}

#[test]
fn crossover_bands_meet_at_minus_six_db() {
    let lp = measure_band(CrossoverBand::Lowpass, 1000.0, 1000.0);
    let hp = measure_band(CrossoverBand::Highpass, 1000.0, 1000.0);
    assert!((lp + 6.02).abs() < 0.5, "lowpass at cutoff {lp:.2} dB");
    assert!((hp + 6.02).abs() < 0.5, "highpass at cutoff {hp:.2} dB");
}

#[test]
fn crossover_recombines_flat() {
    for &freq in &[100.0, 500.0, 1000.0, 2000.0, 5000.0] {
        let mut lp = LinkwitzRiley::new(CrossoverBand::Lowpass, SAMPLE_RATE, 1000.0);
        let mut hp = LinkwitzRiley::new(CrossoverBand::Highpass, SAMPLE_RATE, 1000.0);
        let input = generate_sine(freq, SAMPLE_RATE, 9600);
        let mut low = input.clone();
        let mut high = input.clone();
        lp.process_channel(0, &mut low);
        hp.process_channel(0, &mut high);
        let sum: Vec<f32> = low.iter().zip(&high).map(|(l, h)| l + h).collect();

        let gain_db = to_db(rms(&sum[4800..]) / rms(&input[4800..]));
        assert!(gain_db.abs() < 0.1, "{freq} Hz recombined at {gain_db:.3} dB");
    }
}

#[test]
fn crossover_through_scratch_buffers() {
    // The bass-mono path: copy into two scratch channels, filter each band,
    // add them back together.
    let input = generate_sine(440.0, SAMPLE_RATE, 512);
    let mut scratch = ScratchBuffer::new();
    scratch.allocate(2, 512);
    scratch.channel_mut(0, 512).copy_from_slice(&input);
    scratch.channel_mut(1, 512).copy_from_slice(&input);

    let mut lp = LinkwitzRiley::new(CrossoverBand::Lowpass, SAMPLE_RATE, 120.0);
    let mut hp = LinkwitzRiley::new(CrossoverBand::Highpass, SAMPLE_RATE, 120.0);
    lp.process_channel(0, scratch.channel_mut(0, 512));
    hp.process_channel(0, scratch.channel_mut(1, 512));

    let mut out = vec![0.0f32; 512];
    for i in 0..512 {
        out[i] = scratch.channel(0, 512)[i] + scratch.channel(1, 512)[i];
    }
    assert!(out.iter().all(|s| s.is_finite() && s.abs() < 1.5));
}

// ============================================================================
// 3. DC blocker
// ============================================================================

#[test]
fn dc_blocker_removes_offset() {
    let mut blocker = DcBlocker::new(SAMPLE_RATE);
    let mut block = vec![0.5f32; 48000];
    blocker.process_block(&mut block);
    assert!(block[47999].abs() < 1e-3, "residual {}", block[47999]);
}

#[test]
fn dc_blocker_passes_audio_band() {
    for &freq in &[50.0, 1000.0, 10000.0] {
        let mut blocker = DcBlocker::new(SAMPLE_RATE);
        let input = generate_sine(freq, SAMPLE_RATE, 24000);
        let mut output = input.clone();
        blocker.process_block(&mut output);
        let gain_db = to_db(rms(&output[12000..]) / rms(&input[12000..]));
        assert!(gain_db.abs() < 0.5, "{freq} Hz through DC blocker at {gain_db:.2} dB");
    }
}

#[test]
fn dc_blocker_strips_offset_from_sine() {
    let mut blocker = DcBlocker::new(SAMPLE_RATE);
    let mut signal: Vec<f32> = generate_sine(1000.0, SAMPLE_RATE, 48000)
        .into_iter()
        .map(|s| 0.5 * s + 0.3)
        .collect();
    blocker.process_block(&mut signal);
    let tail = &signal[24000..];
    let mean: f32 = tail.iter().sum::<f32>() / tail.len() as f32;
    assert!(mean.abs() < 0.01, "mean after blocking {mean}");
}

// ============================================================================
// 4. Gain ramp
// ============================================================================

#[test]
fn gain_ramp_reaches_db_target_in_thirty_ms() {
    let mut gain = LinearSmoothedParam::with_config(db_to_linear(0.0), SAMPLE_RATE, 30.0);
    gain.set_target(db_to_linear(-6.0));

    let ramp: Vec<f32> = (0..1440).map(|_| gain.advance()).collect();
    assert!(gain.is_settled());
    assert!((ramp[1439] - db_to_linear(-6.0)).abs() < 1e-6);

    // Monotonic and evenly spaced.
    let first_step = ramp[1] - ramp[0];
    for pair in ramp.windows(2).take(1438) {
        let step = pair[1] - pair[0];
        assert!(step < 0.0);
        assert!((step - first_step).abs() < 1e-5);
    }
}
