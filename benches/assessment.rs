//! Benchmarks for the comfort pipeline
//!
//! The surface solve dominates the cost and its iteration count depends
//! on clothing insulation, so the cases cover a fast-converging light
//! ensemble, a slow-converging medium one, and the divergent heavy one
//! that exits through the fallback.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use comfort_core::assess_values;

fn bench_assessment(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess");

    group.bench_function("light_clothing", |b| {
        b.iter(|| assess_values(black_box(24.0), 24.0, 0.1, 50.0, 1.2, black_box(0.3)))
    });

    group.bench_function("office_clothing", |b| {
        b.iter(|| assess_values(black_box(24.0), 24.0, 0.1, 50.0, 1.2, black_box(0.5)))
    });

    group.bench_function("heavy_clothing_fallback", |b| {
        b.iter(|| assess_values(black_box(24.0), 24.0, 0.1, 50.0, 1.2, black_box(1.4)))
    });

    group.finish();
}

criterion_group!(benches, bench_assessment);
criterion_main!(benches);
