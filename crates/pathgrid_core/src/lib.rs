pub mod error;
pub mod format;
pub mod json;
pub mod matrix;
pub mod mutation;
pub mod shortest_path;
pub mod symmetry;

pub use error::MatrixError;
pub use format::{FormatOptions, format, format_with};
pub use matrix::{adjacency_matrix::AdjacencyMatrix, vertex::VertexIdx, weight::Weight};
pub use mutation::{add_vertex, remove_last_vertex, try_remove_last_vertex};
pub use shortest_path::floyd_warshall::{
    ShortestPaths, compute_all_pairs_shortest_paths, compute_shortest_paths,
};
pub use symmetry::{SymmetryPolicy, make_symmetric, make_symmetric_in_place, make_symmetric_with};

#[cfg(test)]
pub(crate) mod test_utils;
