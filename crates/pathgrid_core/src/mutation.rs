use tracing::{debug, instrument};

use crate::{
    error::MatrixError,
    matrix::{adjacency_matrix::AdjacencyMatrix, weight::Weight},
};

/// Returns a copy of `matrix` with one more, isolated vertex.
///
/// The new vertex gets the highest index. It has no edge to or from any other vertex
/// and a distance of 0 to itself; every existing entry keeps its position.
#[instrument(skip_all, level = "debug")]
pub fn add_vertex(matrix: &AdjacencyMatrix) -> AdjacencyMatrix {
    let n = matrix.num_vertices();

    let grown = AdjacencyMatrix::from_fn(n + 1, |from, to| {
        if from.get() < n && to.get() < n {
            matrix.get(from, to)
        } else if from == to {
            Weight::ZERO
        } else {
            Weight::Infinity
        }
    });

    debug!("Added vertex {}", n);
    grown
}

/// Returns a copy of `matrix` without its last vertex and the edges touching it.
///
/// A matrix with one vertex or none is returned as is. Use [`try_remove_last_vertex`]
/// to treat that case as an error instead.
#[instrument(skip_all, level = "debug")]
pub fn remove_last_vertex(matrix: &AdjacencyMatrix) -> AdjacencyMatrix {
    try_remove_last_vertex(matrix).unwrap_or_else(|_| matrix.clone())
}

pub fn try_remove_last_vertex(matrix: &AdjacencyMatrix) -> Result<AdjacencyMatrix, MatrixError> {
    let n = matrix.num_vertices();
    if n <= 1 {
        return Err(MatrixError::TooFewVertices(n));
    }

    let shrunk = AdjacencyMatrix::from_fn(n - 1, |from, to| matrix.get(from, to));

    debug!("Removed vertex {}", n - 1);
    Ok(shrunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matrix::vertex::VertexIdx,
        test_utils::{INF, matrix},
    };

    #[test]
    fn test_add_vertex() {
        let m = matrix(&[&[0, 2], &[INF, 0]]);
        let grown = add_vertex(&m);

        assert_eq!(grown, matrix(&[&[0, 2, INF], &[INF, 0, INF], &[INF, INF, 0]]));
        assert_eq!(m.num_vertices(), 2);
    }

    #[test]
    fn test_add_vertex_to_empty() {
        let grown = add_vertex(&AdjacencyMatrix::empty());
        assert_eq!(grown, matrix(&[&[0]]));
    }

    #[test]
    fn test_remove_last_vertex() {
        let m = matrix(&[&[0, 1, 2], &[3, 0, 4], &[5, 6, 0]]);
        let shrunk = remove_last_vertex(&m);

        assert_eq!(shrunk, matrix(&[&[0, 1], &[3, 0]]));
        assert_eq!(m.get(VertexIdx::new(2), VertexIdx::new(1)), Weight::finite(6));
    }

    #[test]
    fn test_remove_last_vertex_degenerate() {
        let single = matrix(&[&[0]]);
        assert_eq!(remove_last_vertex(&single), single);

        let empty = AdjacencyMatrix::empty();
        assert_eq!(remove_last_vertex(&empty), empty);
    }

    #[test]
    fn test_try_remove_last_vertex() {
        assert_eq!(
            try_remove_last_vertex(&matrix(&[&[0]])),
            Err(MatrixError::TooFewVertices(1))
        );
        assert_eq!(
            try_remove_last_vertex(&AdjacencyMatrix::empty()),
            Err(MatrixError::TooFewVertices(0))
        );
        assert_eq!(
            try_remove_last_vertex(&AdjacencyMatrix::demo()).map(|m| m.num_vertices()),
            Ok(3)
        );
    }

    #[test]
    fn test_add_then_remove_on_empty_keeps_one_vertex() {
        let grown = add_vertex(&AdjacencyMatrix::empty());
        assert_eq!(remove_last_vertex(&grown), matrix(&[&[0]]));
    }

    #[test]
    fn test_add_then_remove() {
        let demo = AdjacencyMatrix::demo();
        assert_eq!(remove_last_vertex(&add_vertex(&demo)), demo);
    }
}
