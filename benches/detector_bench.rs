//! Benchmark of the steady-state per-sample detection path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use csi_presence::{DetectorConfig, MagnitudeVector, PresenceDetector, NUM_SUBCARRIERS};

fn ramp(sign: f64) -> MagnitudeVector {
    let mut v = [0.0; NUM_SUBCARRIERS];
    for (i, val) in v.iter_mut().enumerate() {
        *val = 10.0 + sign * (i as f64 - 12.5);
    }
    v
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    for &window_size in &[20usize, 50, 128] {
        let mut detector = PresenceDetector::new(DetectorConfig {
            window_size,
            ..DetectorConfig::default()
        })
        .expect("valid config");

        // Fill the window so every measured call runs the full pipeline
        // including feature extraction and scoring.
        for k in 0..window_size {
            detector.detect(&ramp(if k % 2 == 0 { 1.0 } else { -1.0 }));
        }

        let samples = [ramp(1.0), ramp(-1.0)];
        let mut k = 0usize;
        group.bench_function(format!("active/window_{}", window_size), |b| {
            b.iter(|| {
                k = k.wrapping_add(1);
                detector.detect(black_box(&samples[k % 2]))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
