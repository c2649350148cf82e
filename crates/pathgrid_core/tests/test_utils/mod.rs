use pathgrid_core::{AdjacencyMatrix, Weight};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random directed graph with non-negative weights, 0 on the diagonal and roughly
/// `density` of the other entries holding an edge.
pub fn create_random_matrix(seed: u64, num_vertices: usize, density: f64) -> AdjacencyMatrix {
    let mut rng = StdRng::seed_from_u64(seed);

    AdjacencyMatrix::from_fn(num_vertices, |from, to| {
        if from == to {
            Weight::ZERO
        } else if rng.random_bool(density) {
            Weight::finite(rng.random_range(1..100))
        } else {
            Weight::Infinity
        }
    })
}

pub fn create_random_matrices() -> Vec<AdjacencyMatrix> {
    let mut matrices = vec![AdjacencyMatrix::empty(), AdjacencyMatrix::demo()];

    for seed in 0..24 {
        let num_vertices = (seed as usize % 9) + 1;
        let density = [0.15, 0.4, 0.8][seed as usize % 3];
        matrices.push(create_random_matrix(seed, num_vertices, density));
    }

    matrices
}
