use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use route_matrix::algorithm::AllPairsAlgorithm;
use route_matrix::graph::generators::generate_random_dense;
use route_matrix::{FloydWarshall, RepeatedDijkstra};

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");

    for &size in &[16usize, 64, 128] {
        let weights = generate_random_dense(size, 0.3, 100.0, size as u64);

        group.bench_with_input(BenchmarkId::new("floyd_warshall", size), &weights, |b, w| {
            b.iter(|| FloydWarshall::new().compute(black_box(w)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("repeated_dijkstra", size), &weights, |b, w| {
            b.iter(|| RepeatedDijkstra::new().compute(black_box(w)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_all_pairs);
criterion_main!(benches);
