//! Benchmarks for conjugate partitions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use partitions::{conjugate, conjugate_into, conjugate_len};

/// Staircase partition `[len, len - 1, ..., 1, 0]` with the sentinel.
fn staircase(len: usize) -> Vec<usize> {
    (0..=len).rev().collect()
}

fn bench_conjugate(c: &mut Criterion) {
    let mut group = c.benchmark_group("conjugate");

    for len in [8usize, 64, 512] {
        let part = staircase(len);
        let total = conjugate_len(&part);
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::new("into", len), &part, |b, part| {
            let mut conj = vec![0usize; total];
            b.iter(|| {
                let mut cursor = 0;
                black_box(conjugate_into(black_box(part), &mut cursor, &mut conj).is_ok());
                black_box(cursor);
            });
        });

        group.bench_with_input(BenchmarkId::new("owned", len), &part, |b, part| {
            b.iter(|| black_box(conjugate(black_box(&part[..len]))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conjugate);
criterion_main!(benches);
