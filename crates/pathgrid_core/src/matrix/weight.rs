use std::{fmt, ops::Add, str::FromStr};

use crate::error::MatrixError;

pub const INFINITY_SYMBOL: &str = "∞";

/// Weight of an edge, or length of a path.
///
/// `Infinity` means there is no direct edge (in an adjacency matrix) or that the
/// target is unreachable (in a distance matrix). Every finite weight compares
/// smaller than `Infinity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Weight {
    Finite(u64),
    #[default]
    Infinity,
}

impl Weight {
    pub const ZERO: Weight = Weight::Finite(0);

    pub const fn finite(value: u64) -> Self {
        Weight::Finite(value)
    }

    pub const fn is_finite(&self) -> bool {
        matches!(self, Weight::Finite(_))
    }

    pub const fn is_infinite(&self) -> bool {
        matches!(self, Weight::Infinity)
    }

    /// Length of the path `self` followed by `other`.
    ///
    /// Returns `None` when either side is `Infinity` or when the sum does not fit,
    /// so a caller never sees a wrapped value.
    pub fn checked_add(self, other: Weight) -> Option<Weight> {
        match (self, other) {
            (Weight::Finite(a), Weight::Finite(b)) => a.checked_add(b).map(Weight::Finite),
            _ => None,
        }
    }
}

impl From<u64> for Weight {
    fn from(value: u64) -> Self {
        Weight::Finite(value)
    }
}

impl Add for Weight {
    type Output = Weight;

    /// Saturates to `Infinity`.
    fn add(self, other: Weight) -> Weight {
        self.checked_add(other).unwrap_or(Weight::Infinity)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width/alignment flags apply to both variants
        match self {
            Weight::Finite(value) => f.pad(&value.to_string()),
            Weight::Infinity => f.pad(INFINITY_SYMBOL),
        }
    }
}

/// Parses the text of a matrix cell.
///
/// An empty cell, `∞` and `INF` (any case) all mean `Infinity`. Anything else must be
/// a non-negative decimal integer.
impl FromStr for Weight {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() || trimmed == INFINITY_SYMBOL || trimmed.eq_ignore_ascii_case("INF")
        {
            return Ok(Weight::Infinity);
        }

        trimmed
            .parse::<u64>()
            .map(Weight::Finite)
            .map_err(|_| MatrixError::InvalidCell(s.to_owned()))
    }
}
