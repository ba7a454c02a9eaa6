//! Criterion benchmarks for the annealing engine.
//!
//! Short fixed-seed runs measure the full loop (proposal, projection,
//! objective, acceptance); the objective is benchmarked alone since the
//! hot loop evaluates it twice per iteration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dice_anneal::anneal::{AnnealConfig, AnnealRunner};
use dice_anneal::objective::divergence;
use dice_anneal::simplex::Distribution;

fn bench_anneal_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_run");
    group.sample_size(10);

    for &iters in &[1_000usize, 10_000, 100_000] {
        let config = AnnealConfig::default().with_iterations(iters).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(iters), &config, |b, cfg| {
            b.iter(|| {
                let result = AnnealRunner::run(black_box(cfg)).expect("run failed");
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_divergence(c: &mut Criterion) {
    let d = Distribution::project([0.05, 0.05, 0.1, 0.2, 0.3, 0.3]).unwrap();
    c.bench_function("divergence", |b| b.iter(|| black_box(divergence(black_box(&d)))));
}

criterion_group!(benches, bench_anneal_run, bench_divergence);
criterion_main!(benches);
