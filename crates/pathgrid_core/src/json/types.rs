use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::MatrixError,
    matrix::{adjacency_matrix::AdjacencyMatrix, weight::Weight},
};

/// On-disk form of an adjacency matrix.
///
/// ```json
/// { "weights": [[0, 5, "∞"], ["INF", 0, 3], [null, "", 0]] }
/// ```
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename = "AdjacencyMatrix")]
pub struct JsonAdjacencyMatrix {
    /// Row-major weights, `weights[from][to]`
    pub weights: Vec<Vec<JsonWeight>>,
}

/// A finite weight, or a cell text (`""`, `"∞"`, `"INF"` for no edge, or a number
/// written as a string), or `null` for no edge.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged, rename = "Weight")]
pub enum JsonWeight {
    Finite(u64),
    Text(String),
    Missing(()),
}

impl TryFrom<&JsonWeight> for Weight {
    type Error = MatrixError;

    fn try_from(value: &JsonWeight) -> Result<Self, Self::Error> {
        match value {
            JsonWeight::Finite(value) => Ok(Weight::Finite(*value)),
            JsonWeight::Text(text) => text.parse(),
            JsonWeight::Missing(()) => Ok(Weight::Infinity),
        }
    }
}

impl From<Weight> for JsonWeight {
    fn from(value: Weight) -> Self {
        match value {
            Weight::Finite(value) => JsonWeight::Finite(value),
            Weight::Infinity => JsonWeight::Text(value.to_string()),
        }
    }
}

impl JsonAdjacencyMatrix {
    #[instrument(skip_all, level = "debug")]
    pub fn build_matrix(&self) -> Result<AdjacencyMatrix, MatrixError> {
        let rows = self
            .weights
            .iter()
            .map(|row| row.iter().map(Weight::try_from).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        AdjacencyMatrix::from_rows(rows)
    }
}

impl From<&AdjacencyMatrix> for JsonAdjacencyMatrix {
    fn from(matrix: &AdjacencyMatrix) -> Self {
        JsonAdjacencyMatrix {
            weights: matrix
                .rows()
                .map(|row| row.iter().copied().map(JsonWeight::from).collect())
                .collect(),
        }
    }
}
