//! Benchmarks for uniform random partitions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use partitions::{FeasibleSet, Method, PartitionTable};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let set = FeasibleSet::new(300, 20);

    for method in [
        Method::BottomUp,
        Method::TopDown,
        Method::Multiplicity,
        Method::DivideAndConquer,
    ] {
        let name = format!("{method:?}");
        group.bench_with_input(BenchmarkId::new(name, "300/20"), &method, |b, &method| {
            let mut table = PartitionTable::new();
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            b.iter(|| black_box(set.sample(&mut table, method, &mut rng)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
