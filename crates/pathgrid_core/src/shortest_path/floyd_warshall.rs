//! Floyd-Warshall algorithm for all-pairs shortest paths.
//!
//! Θ(n³) time and Θ(n²) memory, independent of the number of edges.

use tracing::{Level, debug, instrument, trace};

use crate::matrix::{adjacency_matrix::AdjacencyMatrix, vertex::VertexIdx, weight::Weight};

/// Distances between every pair of vertices, plus enough information to rebuild
/// the path behind each finite distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    distances: AdjacencyMatrix,

    /// `next[from * n + to]` is the vertex following `from` on the best known
    /// path to `to`, `None` while `to` is unreachable.
    next: Vec<Option<VertexIdx>>,
}

impl ShortestPaths {
    pub fn distances(&self) -> &AdjacencyMatrix {
        &self.distances
    }

    pub fn into_distances(self) -> AdjacencyMatrix {
        self.distances
    }

    pub fn distance(&self, from: VertexIdx, to: VertexIdx) -> Weight {
        self.distances.get(from, to)
    }

    #[inline(always)]
    fn next_hop(&self, from: VertexIdx, to: VertexIdx) -> Option<VertexIdx> {
        self.next[from.get() * self.distances.num_vertices() + to.get()]
    }

    /// Vertices visited by a shortest path from `from` to `to`, both ends included.
    ///
    /// Returns `None` when `to` cannot be reached from `from` or when either vertex
    /// does not exist.
    pub fn path(&self, from: VertexIdx, to: VertexIdx) -> Option<Vec<VertexIdx>> {
        if !self.distances.contains(from) || !self.distances.contains(to) {
            return None;
        }

        if from == to {
            return Some(vec![from]);
        }

        let mut path = vec![from];
        let mut current = from;

        while current != to {
            current = self.next_hop(current, to)?;
            path.push(current);

            // Only reachable with a negative cycle on the way
            if path.len() > self.distances.num_vertices() {
                return None;
            }
        }

        Some(path)
    }
}

/// Returns the matrix of shortest distances between every pair of vertices.
///
/// The input is left untouched. Edge weights must not form a negative cycle; unreachable
/// pairs stay `Infinity`.
pub fn compute_all_pairs_shortest_paths(matrix: &AdjacencyMatrix) -> AdjacencyMatrix {
    compute_shortest_paths(matrix).into_distances()
}

#[instrument(skip_all, level = Level::DEBUG, fields(num_vertices = matrix.num_vertices()))]
pub fn compute_shortest_paths(matrix: &AdjacencyMatrix) -> ShortestPaths {
    let n = matrix.num_vertices();
    let mut dist = matrix.clone();

    let mut next: Vec<Option<VertexIdx>> = matrix
        .vertices()
        .flat_map(|from| matrix.vertices().map(move |to| (from, to)))
        .map(|(from, to)| matrix.get(from, to).is_finite().then_some(to))
        .collect();

    if n <= 1 {
        return ShortestPaths {
            distances: dist,
            next,
        };
    }

    let mut relaxations = 0usize;

    // k must stay the outermost loop
    for k in dist.vertices() {
        for i in dist.vertices() {
            let d_ik = dist.get(i, k);
            if d_ik.is_infinite() {
                continue;
            }

            for j in dist.vertices() {
                let d_kj = dist.get(k, j);
                // Both sides are finite here, an overflowing sum is no better than Infinity
                let Some(through_k) = d_ik.checked_add(d_kj) else {
                    continue;
                };

                if through_k < dist.get(i, j) {
                    trace!(%i, %j, %k, %through_k, "relax");
                    dist.set(i, j, through_k);
                    next[i.get() * n + j.get()] = next[i.get() * n + k.get()];
                    relaxations += 1;
                }
            }
        }
    }

    debug!(relaxations, "All-pairs shortest paths computed");

    ShortestPaths {
        distances: dist,
        next,
    }
}
