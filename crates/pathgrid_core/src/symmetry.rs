use tracing::debug;

use crate::matrix::{adjacency_matrix::AdjacencyMatrix, weight::Weight};

/// How to reconcile the two directions of an edge when making a matrix symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryPolicy {
    /// Visit every `(i, j)` in row-major order. A finite `(i, j)` is copied to `(j, i)`,
    /// otherwise a finite `(j, i)` is copied to `(i, j)`.
    ///
    /// When both directions hold different finite weights, the one above the diagonal
    /// (`i < j`) wins because it is visited first and then copied back.
    #[default]
    RowMajorFill,

    /// Both directions take the smaller of the two weights. Independent of visit order.
    Minimum,
}

/// Returns a symmetric copy of `matrix` using [`SymmetryPolicy::RowMajorFill`].
pub fn make_symmetric(matrix: &AdjacencyMatrix) -> AdjacencyMatrix {
    make_symmetric_with(matrix, SymmetryPolicy::RowMajorFill)
}

pub fn make_symmetric_with(matrix: &AdjacencyMatrix, policy: SymmetryPolicy) -> AdjacencyMatrix {
    let mut symmetric = matrix.clone();
    make_symmetric_in_place(&mut symmetric, policy);
    symmetric
}

/// Same as [`make_symmetric_with`] but overwrites `matrix`.
pub fn make_symmetric_in_place(matrix: &mut AdjacencyMatrix, policy: SymmetryPolicy) {
    let mut filled = 0usize;

    match policy {
        SymmetryPolicy::RowMajorFill => {
            for i in matrix.vertices() {
                for j in matrix.vertices() {
                    let forward = matrix.get(i, j);
                    let backward = matrix.get(j, i);

                    if forward.is_finite() {
                        if backward != forward {
                            filled += 1;
                        }
                        matrix.set(j, i, forward);
                    } else if backward.is_finite() {
                        filled += 1;
                        matrix.set(i, j, backward);
                    }
                }
            }
        }
        SymmetryPolicy::Minimum => {
            for i in matrix.vertices() {
                for j in matrix.vertices().skip(i.get() + 1) {
                    let forward = matrix.get(i, j);
                    let backward = matrix.get(j, i);
                    let weight: Weight = forward.min(backward);

                    if forward != backward {
                        filled += 1;
                    }
                    matrix.set(i, j, weight);
                    matrix.set(j, i, weight);
                }
            }
        }
    }

    debug!(?policy, filled, "Matrix made symmetric");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matrix::vertex::VertexIdx,
        test_utils::{INF, matrix},
    };

    #[test]
    fn test_fill_missing_direction() {
        let m = matrix(&[&[0, 5], &[INF, 0]]);
        let symmetric = make_symmetric(&m);

        assert_eq!(symmetric.get(VertexIdx::new(1), VertexIdx::new(0)), Weight::finite(5));
        assert!(symmetric.is_symmetric());
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_fill_from_lower_triangle() {
        let m = matrix(&[&[0, INF], &[7, 0]]);
        assert_eq!(make_symmetric(&m), matrix(&[&[0, 7], &[7, 0]]));
    }

    #[test]
    fn test_row_major_conflict() {
        let m = matrix(&[&[0, 9, INF], &[2, 0, 4], &[INF, 1, 0]]);

        assert_eq!(
            make_symmetric(&m),
            matrix(&[&[0, 9, INF], &[9, 0, 4], &[INF, 4, 0]])
        );
    }

    #[test]
    fn test_minimum_conflict() {
        let m = matrix(&[&[0, 9, INF], &[2, 0, 4], &[INF, 1, 0]]);

        assert_eq!(
            make_symmetric_with(&m, SymmetryPolicy::Minimum),
            matrix(&[&[0, 2, INF], &[2, 0, 1], &[INF, 1, 0]])
        );
    }

    #[test]
    fn test_demo_symmetric() {
        let symmetric = make_symmetric(&AdjacencyMatrix::demo());

        assert!(symmetric.is_symmetric());
        assert_eq!(
            symmetric,
            matrix(&[
                &[0, 5, INF, 10],
                &[5, 0, 3, INF],
                &[INF, 3, 0, 1],
                &[10, INF, 1, 0],
            ])
        );
    }

    #[test]
    fn test_in_place() {
        let mut m = matrix(&[&[0, INF], &[3, 0]]);
        make_symmetric_in_place(&mut m, SymmetryPolicy::RowMajorFill);
        assert_eq!(m, matrix(&[&[0, 3], &[3, 0]]));
    }

    #[test]
    fn test_already_symmetric_unchanged() {
        let m = matrix(&[&[0, 4, INF], &[4, 0, 6], &[INF, 6, 0]]);

        assert_eq!(make_symmetric(&m), m);
        assert_eq!(make_symmetric_with(&m, SymmetryPolicy::Minimum), m);
    }
}
