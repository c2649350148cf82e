use crate::{error::MatrixError, matrix::vertex::VertexIdx, matrix::weight::Weight};

/// Dense n×n matrix of edge weights.
///
/// Entries are stored in a flat row-major vector: the weight of the edge
/// `from -> to` lives at `from * num_vertices + to`. The matrix may be directed;
/// symmetry is a property a caller can ask for, not an invariant of the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AdjacencyMatrix {
    weights: Vec<Weight>,
    num_vertices: usize,
}

fn is_flat_matrix_symmetric(weights: &[Weight], num_vertices: usize) -> bool {
    for i in 0..num_vertices {
        for j in (i + 1)..num_vertices {
            if weights[i * num_vertices + j] != weights[j * num_vertices + i] {
                return false;
            }
        }
    }
    true
}

impl AdjacencyMatrix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A graph of `num_vertices` vertices without any edge: 0 on the diagonal,
    /// `Infinity` everywhere else.
    pub fn new_unconnected(num_vertices: usize) -> Self {
        let mut weights = vec![Weight::Infinity; num_vertices * num_vertices];
        for i in 0..num_vertices {
            weights[i * num_vertices + i] = Weight::ZERO;
        }

        AdjacencyMatrix {
            weights,
            num_vertices,
        }
    }

    pub fn from_rows<R, W>(rows: impl IntoIterator<Item = R>) -> Result<Self, MatrixError>
    where
        R: IntoIterator<Item = W>,
        W: Into<Weight>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<Weight>>())
            .collect::<Vec<_>>();

        let num_vertices = rows.len();
        if let Some((row, len)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_vertices)
        {
            return Err(MatrixError::NotSquare {
                row,
                len,
                expected: num_vertices,
            });
        }

        Ok(AdjacencyMatrix {
            weights: rows.into_iter().flatten().collect(),
            num_vertices,
        })
    }

    /// Builds an `n×n` matrix where every entry is computed from its position.
    pub fn from_fn(num_vertices: usize, mut f: impl FnMut(VertexIdx, VertexIdx) -> Weight) -> Self {
        let mut weights = Vec::with_capacity(num_vertices * num_vertices);
        for from in 0..num_vertices {
            for to in 0..num_vertices {
                weights.push(f(VertexIdx::new(from), VertexIdx::new(to)));
            }
        }

        AdjacencyMatrix {
            weights,
            num_vertices,
        }
    }

    /// The fixed 4-vertex example graph: `0→1:5`, `0→3:10`, `1→2:3`, `2→3:1`.
    pub fn demo() -> Self {
        const INF: Weight = Weight::Infinity;
        let w = Weight::finite;

        let rows = [
            [w(0), w(5), INF, w(10)],
            [INF, w(0), w(3), INF],
            [INF, INF, w(0), w(1)],
            [INF, INF, INF, w(0)],
        ];

        AdjacencyMatrix {
            weights: rows.into_iter().flatten().collect(),
            num_vertices: 4,
        }
    }

    #[inline(always)]
    fn index(&self, from: VertexIdx, to: VertexIdx) -> usize {
        from.get() * self.num_vertices + to.get()
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIdx> + use<> {
        (0..self.num_vertices).map(VertexIdx::new)
    }

    pub fn contains(&self, vertex: VertexIdx) -> bool {
        vertex.get() < self.num_vertices
    }

    pub fn check_vertex(&self, vertex: VertexIdx) -> Result<(), MatrixError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(MatrixError::VertexOutOfBounds {
                vertex: vertex.get(),
                num_vertices: self.num_vertices,
            })
        }
    }

    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[inline(always)]
    pub fn get(&self, from: VertexIdx, to: VertexIdx) -> Weight {
        assert!(self.contains(from) && self.contains(to));
        self.weights[self.index(from, to)]
    }

    pub fn try_get(&self, from: VertexIdx, to: VertexIdx) -> Result<Weight, MatrixError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weights[self.index(from, to)])
    }

    /// # Panics
    ///
    /// Panics if either vertex is out of bounds.
    #[inline(always)]
    pub fn set(&mut self, from: VertexIdx, to: VertexIdx, weight: Weight) {
        assert!(self.contains(from) && self.contains(to));
        let index = self.index(from, to);
        self.weights[index] = weight;
    }

    /// Returns a copy of `self` with the edge `from -> to` set to `weight`.
    pub fn with_edge(
        &self,
        from: VertexIdx,
        to: VertexIdx,
        weight: Weight,
    ) -> Result<AdjacencyMatrix, MatrixError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let mut matrix = self.clone();
        matrix.set(from, to, weight);
        Ok(matrix)
    }

    pub fn row(&self, from: VertexIdx) -> &[Weight] {
        let start = from.get() * self.num_vertices;
        &self.weights[start..start + self.num_vertices]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway
        self.weights.chunks_exact(self.num_vertices.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(<[Weight]>::to_vec).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        is_flat_matrix_symmetric(&self.weights, self.num_vertices)
    }

    pub fn edge_count(&self) -> usize {
        self.vertices()
            .flat_map(|from| self.vertices().map(move |to| (from, to)))
            .filter(|&(from, to)| from != to && self.get(from, to).is_finite())
            .count()
    }
}
