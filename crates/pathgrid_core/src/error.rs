use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Invalid cell value: {0:?}")]
    InvalidCell(String),

    #[error("Cannot remove a vertex from a matrix with {0} vertices")]
    TooFewVertices(usize),

    #[error("Vertex {vertex} is out of bounds for a matrix with {num_vertices} vertices")]
    VertexOutOfBounds { vertex: usize, num_vertices: usize },
}
