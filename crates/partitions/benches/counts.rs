//! Benchmarks for restricted partition counting.
//!
//! The recurrence is O(n·k); these track the in-place kernel against the
//! allocating query and the memoized table.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use partitions::{accumulate_counts, partition_counts, seeded_table, PartitionTable, PartsLimit};

// ============================================================================
// Benchmark: unrestricted table
// ============================================================================

fn bench_unrestricted(c: &mut Criterion) {
    let mut group = c.benchmark_group("counts_unrestricted");

    for n in [64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("in_place", n), &n, |b, &n| {
            let Ok(seed) = seeded_table(n) else {
                return;
            };
            b.iter(|| {
                let mut table = seed.clone();
                black_box(accumulate_counts(n, PartsLimit::Unlimited, &mut table).is_ok());
                black_box(table);
            });
        });

        group.bench_with_input(BenchmarkId::new("allocating", n), &n, |b, &n| {
            b.iter(|| black_box(partition_counts(black_box(n), PartsLimit::Unlimited)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: bounded table
// ============================================================================

fn bench_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("counts_bounded");
    let n = 1024usize;

    for k in [2usize, 16, 128] {
        group.bench_with_input(BenchmarkId::new("at_most", k), &k, |b, &k| {
            b.iter(|| black_box(partition_counts(n, PartsLimit::AtMost(black_box(k)))));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: memoized lookups
// ============================================================================

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("counts_table");

    group.bench_function("cold", |b| {
        b.iter(|| {
            let mut table = PartitionTable::new();
            black_box(table.exact(black_box(200), 20))
        });
    });

    group.bench_function("warm", |b| {
        let mut table = PartitionTable::new();
        black_box(table.exact(200, 20).is_ok());
        b.iter(|| black_box(table.exact(black_box(200), 20)));
    });

    group.finish();
}

criterion_group!(benches, bench_unrestricted, bench_bounded, bench_table);
criterion_main!(benches);
