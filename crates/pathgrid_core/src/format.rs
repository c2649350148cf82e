use crate::matrix::{adjacency_matrix::AdjacencyMatrix, weight::Weight};

pub const DEFAULT_CELL_WIDTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Minimum width of a cell, values are left-justified and never truncated.
    pub cell_width: usize,
    pub infinity_symbol: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            cell_width: DEFAULT_CELL_WIDTH,
            infinity_symbol: crate::matrix::weight::INFINITY_SYMBOL.to_owned(),
        }
    }
}

/// Renders `matrix` as text, one line per row.
pub fn format(matrix: &AdjacencyMatrix) -> String {
    format_with(matrix, &FormatOptions::default())
}

pub fn format_with(matrix: &AdjacencyMatrix, options: &FormatOptions) -> String {
    let width = options.cell_width;
    let mut text = String::new();

    for row in matrix.rows() {
        for weight in row {
            let cell = match weight {
                Weight::Finite(value) => format!("{value:<width$}"),
                Weight::Infinity => format!("{:<width$}", options.infinity_symbol),
            };
            text.push_str(&cell);
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{INF, matrix};

    #[test]
    fn test_format_empty() {
        assert_eq!(format(&AdjacencyMatrix::empty()), "");
    }

    #[test]
    fn test_format_demo() {
        let text = format(&AdjacencyMatrix::demo());

        assert_eq!(
            text,
            "0     5     ∞     10    \n\
             ∞     0     3     ∞     \n\
             ∞     ∞     0     1     \n\
             ∞     ∞     ∞     0     \n"
        );
    }

    #[test]
    fn test_format_wide_values_not_truncated() {
        let text = format(&matrix(&[&[0, 12345678], &[INF, 0]]));
        assert_eq!(text.lines().next(), Some("0     12345678"));
    }

    #[test]
    fn test_format_with_options() {
        let options = FormatOptions {
            cell_width: 3,
            infinity_symbol: "-".to_owned(),
        };
        let text = format_with(&matrix(&[&[0, INF], &[1, 0]]), &options);

        assert_eq!(text, "0  -  \n1  0  \n");
    }
}
