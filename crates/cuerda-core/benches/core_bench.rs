//! Criterion benchmarks for cuerda-core DSP primitives
//!
//! Run with: cargo bench -p cuerda-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cuerda_core::{
    Biquad, BlockRamp, CapacityClass, LinePool, StereoBiquad, balanced_mono_sum,
    lowpass_coefficients, pan_to_stereo,
};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[16, 64, 256, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_delay_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("DelayLine");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("read_write", block_size),
            &block_size,
            |b, _| {
                let mut pool = LinePool::new(1, 0);
                let mut line = pool.reserve(CapacityClass::Short).unwrap();
                b.iter(|| {
                    for &sample in &input {
                        let out = line.read(black_box(109.09));
                        line.write(black_box(sample + out * 0.5));
                        black_box(out);
                    }
                });
            },
        );
    }

    group.bench_function("reserve_release", |b| {
        let mut pool = LinePool::new(2, 0);
        b.iter(|| {
            let line = pool.reserve(CapacityClass::Short).unwrap();
            pool.release(black_box(line));
        });
    });

    group.finish();
}

fn bench_biquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("Biquad");

    let (b0, b1, b2, a0, a1, a2) = lowpass_coefficients(1000.0, 0.707, SAMPLE_RATE);

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut biquad = Biquad::new();
                biquad.set_coefficients(b0, b1, b2, a0, a1, a2);
                b.iter(|| {
                    for &sample in &input {
                        black_box(biquad.process(black_box(sample)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("process_pair", block_size),
            &block_size,
            |b, _| {
                let mut pair = StereoBiquad::new();
                pair.set_coefficients(b0, b1, b2, a0, a1, a2);
                b.iter(|| {
                    for &sample in &input {
                        black_box(pair.process_pair(black_box(sample), black_box(-sample)));
                    }
                });
            },
        );
    }

    // Coefficient calculation cost
    group.bench_function("coefficient_calc", |b| {
        b.iter(|| {
            black_box(lowpass_coefficients(
                black_box(1000.0),
                black_box(0.707),
                black_box(SAMPLE_RATE),
            ))
        });
    });

    group.finish();
}

fn bench_block_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("BlockRamp");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::new("advance", block_size),
            &block_size,
            |b, &size| {
                let mut ramp = BlockRamp::new(0.0);
                let mut target = 1.0;
                b.iter(|| {
                    ramp.set_block_target(black_box(target), size);
                    for _ in 0..size {
                        black_box(ramp.advance());
                    }
                    target = -target;
                });
            },
        );
    }

    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pan");

    group.bench_function("balanced_mono_sum", |b| {
        b.iter(|| {
            black_box(balanced_mono_sum(
                black_box(0.3),
                black_box(0.5),
                black_box(-0.25),
            ))
        });
    });

    group.bench_function("pan_to_stereo", |b| {
        b.iter(|| black_box(pan_to_stereo(black_box(0.3), black_box(0.5))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_delay_line,
    bench_biquad,
    bench_block_ramp,
    bench_pan
);
criterion_main!(benches);
