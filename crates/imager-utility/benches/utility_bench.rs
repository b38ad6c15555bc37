//! Criterion benchmarks for the utility chain
//!
//! Run with: cargo bench -p imager-utility
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use imager_utility::{ParamKey, ParameterSet, ProcessSpec, UtilityProcessor};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize, freq: f32) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * freq * t).sin() * 0.5
        })
        .collect()
}

fn bench_config(c: &mut Criterion, group_name: &str, configure: impl Fn(&ParameterSet)) {
    let mut group = c.benchmark_group(group_name);

    for &block_size in BLOCK_SIZES {
        let left_src = generate_test_signal(block_size, 440.0);
        let right_src = generate_test_signal(block_size, 660.0);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, &size| {
                let params = ParameterSet::new();
                configure(&params);
                let mut processor = UtilityProcessor::new(params);
                processor
                    .prepare(ProcessSpec::new(SAMPLE_RATE, size, 2))
                    .unwrap();
                let mut left = left_src.clone();
                let mut right = right_src.clone();
                b.iter(|| {
                    left.copy_from_slice(&left_src);
                    right.copy_from_slice(&right_src);
                    processor.process(black_box(&mut [&mut left[..], &mut right[..]]));
                });
            },
        );
    }

    group.finish();
}

fn bench_defaults(c: &mut Criterion) {
    bench_config(c, "Utility/defaults", |_| {});
}

fn bench_width(c: &mut Criterion) {
    bench_config(c, "Utility/width", |params| {
        params.set(ParamKey::Width, 180.0);
        params.set(ParamKey::Balance, -10.0);
    });
}

fn bench_bass_mono(c: &mut Criterion) {
    bench_config(c, "Utility/bass_mono", |params| {
        params.set_bool(ParamKey::BassMono, true);
        params.set(ParamKey::BassMonoCrossover, 150.0);
    });
}

fn bench_everything(c: &mut Criterion) {
    bench_config(c, "Utility/full_chain", |params| {
        params.set_bool(ParamKey::InvertPhaseLeft, true);
        params.set(ParamKey::Width, 250.0);
        params.set_bool(ParamKey::BassMono, true);
        params.set(ParamKey::Gain, -3.0);
        params.set(ParamKey::Balance, 12.0);
        params.set_bool(ParamKey::Dc, true);
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let params = ParameterSet::new();
    c.bench_function("ParameterSet/snapshot", |b| {
        b.iter(|| black_box(params.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_defaults,
    bench_width,
    bench_bass_mono,
    bench_everything,
    bench_snapshot
);
criterion_main!(benches);
