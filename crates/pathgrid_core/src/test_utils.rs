use crate::matrix::{adjacency_matrix::AdjacencyMatrix, weight::Weight};

/// Stands for `Weight::Infinity` in the integer literals passed to [`matrix`].
pub const INF: u64 = u64::MAX;

pub fn matrix(rows: &[&[u64]]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(rows.iter().map(|row| {
        row.iter().map(|&value| {
            if value == INF {
                Weight::Infinity
            } else {
                Weight::finite(value)
            }
        })
    }))
    .unwrap()
}
