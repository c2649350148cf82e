use super::weight::Weight;

/// Index of a vertex, i.e. of a row/column of an adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexIdx(usize);

impl std::fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl VertexIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::ops::Index<VertexIdx> for [Weight] {
    type Output = Weight;
    fn index(&self, index: VertexIdx) -> &Self::Output {
        &self[index.0]
    }
}
