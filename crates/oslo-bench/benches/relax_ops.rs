//! Criterion benchmarks for relaxation and full runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use oslo_bench::warmed_pile;
use oslo_core::Pile;
use oslo_engine::{drive, relax};

fn bench_steady_state_grain(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state_grain");
    for size in [16usize, 64, 256] {
        let mut pile = warmed_pile(size, 42).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                pile.add_grain();
                black_box(relax(&mut pile));
            });
        });
    }
    group.finish();
}

fn bench_10k_steps_l64(c: &mut Criterion) {
    c.bench_function("10k_steps_l64", |b| {
        b.iter(|| {
            let mut pile = Pile::seeded(64, 42).unwrap();
            black_box(drive(&mut pile, 10_000));
        });
    });
}

criterion_group!(benches, bench_steady_state_grain, bench_10k_steps_l64);
criterion_main!(benches);
