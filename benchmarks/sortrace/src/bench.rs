//! Traced sort benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of each algorithm (100 to 5K elements)
//! - Input shapes (random, sorted, reversed, few unique keys)
//! - Replay of recorded traces
//! - Run-level parallelism (comparison and multi-input modes)
//!
//! For serial execution of the parallel groups, use `SORTRACE_MODE=serial cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use sortrace_parallel::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("SORTRACE_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniformly random integers.
fn generate_random(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-10_000..10_000)).collect()
}

/// Ascending integers.
fn generate_sorted(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// Descending integers.
fn generate_reversed(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// Random integers drawn from only four keys.
fn generate_few_unique(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..4)).collect()
}

/// Random floats in the unit interval.
fn generate_floats(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<f64>()).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [100, 1_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random(size, 42);

        for algorithm in SortAlgorithm::ALL {
            // Quadratic algorithms record millions of events at 5K elements
            if size > 1_000 && matches!(algorithm, Bubble | Insertion) {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algorithm.id(), size), &size, |b, _| {
                b.iter(|| run_sort(algorithm, black_box(&data)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_input_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_shapes");
    group.sample_size(30);

    let size = 1_000;
    let shapes = [
        ("random", generate_random(size, 7)),
        ("sorted", generate_sorted(size)),
        ("reversed", generate_reversed(size)),
        ("few_unique", generate_few_unique(size, 7)),
    ];

    for (shape, data) in &shapes {
        for algorithm in [Quick, Merge] {
            group.bench_with_input(BenchmarkId::new(algorithm.id(), shape), shape, |b, _| {
                b.iter(|| run_sort(algorithm, black_box(data)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("floats");
    group.sample_size(30);

    let data = generate_floats(2_000, 3);
    for algorithm in [Quick, Merge] {
        group.bench_function(algorithm.id(), |b| {
            b.iter(|| run_sort(algorithm, black_box(&data)).unwrap())
        });
    }
    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    group.sample_size(30);

    let data = generate_random(2_000, 11);
    for algorithm in [Quick, Merge] {
        let (_, trace) = run_sort(algorithm, &data).unwrap();
        group.throughput(Throughput::Elements(trace.len() as u64));
        group.bench_function(algorithm.id(), |b| {
            b.iter(|| replay(black_box(&data), black_box(&trace)).unwrap())
        });
    }
    group.finish();
}

fn bench_verified_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("verified_run");
    group.sample_size(30);

    let data = generate_random(2_000, 5);
    let plain = SortTrace::new().algorithm(Merge).adapter(Batch).build().unwrap();
    let verified = SortTrace::new()
        .algorithm(Merge)
        .return_stats()
        .verify_replay()
        .adapter(Batch)
        .build()
        .unwrap();

    group.bench_function("plain", |b| b.iter(|| plain.run(black_box(&data)).unwrap()));
    group.bench_function("stats_and_replay", |b| {
        b.iter(|| verified.run(black_box(&data)).unwrap())
    });
    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("comparison_{}", mode_name));
    group.sample_size(20);

    let data = generate_random(800, 42);
    let comparison = Compare::new().parallel(use_parallel).build().unwrap();

    group.bench_function("all_algorithms", |b| {
        b.iter(|| comparison.run(black_box(&data)).unwrap())
    });
    group.finish();
}

fn bench_multi(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("multi_{}", mode_name));
    group.sample_size(20);

    for count in [8, 32] {
        let inputs: Vec<Vec<i64>> = (0..count).map(|k| generate_random(1_000, k)).collect();
        let multi = MultiSort::new()
            .algorithm(Quick)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.throughput(Throughput::Elements((count * 1_000) as u64));
        group.bench_with_input(BenchmarkId::new("quick", count), &count, |b, _| {
            b.iter(|| multi.run(black_box(&inputs)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_input_shapes,
    bench_floats,
    bench_replay,
    bench_verified_run,
    bench_comparison,
    bench_multi,
);

criterion_main!(benches);
