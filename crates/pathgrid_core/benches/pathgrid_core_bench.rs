use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pathgrid_core::{
    AdjacencyMatrix, SymmetryPolicy, Weight, compute_all_pairs_shortest_paths,
    compute_shortest_paths, make_symmetric_with,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_matrix(num_vertices: usize) -> AdjacencyMatrix {
    let mut rng = StdRng::seed_from_u64(42);
    AdjacencyMatrix::from_fn(num_vertices, |from, to| {
        if from == to {
            Weight::ZERO
        } else if rng.random_bool(0.3) {
            Weight::finite(rng.random_range(1..1000))
        } else {
            Weight::Infinity
        }
    })
}

fn floyd_warshall_benchmark(c: &mut Criterion) {
    for num_vertices in [8, 64, 256] {
        let matrix = random_matrix(num_vertices);

        c.bench_function(&format!("floyd_warshall n={num_vertices}"), |b| {
            b.iter(|| compute_all_pairs_shortest_paths(black_box(&matrix)))
        });

        c.bench_function(&format!("floyd_warshall with paths n={num_vertices}"), |b| {
            b.iter(|| compute_shortest_paths(black_box(&matrix)))
        });
    }
}

fn symmetry_benchmark(c: &mut Criterion) {
    let matrix = random_matrix(256);

    c.bench_function("make_symmetric row-major n=256", |b| {
        b.iter(|| make_symmetric_with(black_box(&matrix), SymmetryPolicy::RowMajorFill))
    });
    c.bench_function("make_symmetric minimum n=256", |b| {
        b.iter(|| make_symmetric_with(black_box(&matrix), SymmetryPolicy::Minimum))
    });
}

criterion_group!(benches, floyd_warshall_benchmark, symmetry_benchmark);
criterion_main!(benches);
