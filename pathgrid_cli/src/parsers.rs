use pathgrid_core::{SymmetryPolicy, Weight};

/// Matrix sizes accepted by the interactive commands.
pub const MIN_VERTICES: usize = 2;
pub const MAX_VERTICES: usize = 8;

pub fn parse_vertex_count(input: &str) -> Result<usize, String> {
    let count = input
        .trim()
        .parse::<usize>()
        .map_err(|_| String::from("Please enter a valid number"))?;

    if (MIN_VERTICES..=MAX_VERTICES).contains(&count) {
        Ok(count)
    } else {
        Err(format!(
            "Please enter a size between {MIN_VERTICES} and {MAX_VERTICES}"
        ))
    }
}

pub fn parse_weight(input: &str) -> Result<Weight, String> {
    input
        .parse::<Weight>()
        .map_err(|_| String::from("Please enter a non-negative number, '∞', 'INF' or nothing"))
}

pub fn parse_symmetry_policy(input: &str) -> Result<SymmetryPolicy, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "row-major" | "row_major" | "fill" => Ok(SymmetryPolicy::RowMajorFill),
        "min" | "minimum" => Ok(SymmetryPolicy::Minimum),
        _ => Err(String::from("Invalid policy, expected 'row-major' or 'minimum'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vertex_count() {
        assert_eq!(parse_vertex_count("2"), Ok(2));
        assert_eq!(parse_vertex_count(" 8 "), Ok(8));
        assert!(parse_vertex_count("1").is_err());
        assert!(parse_vertex_count("9").is_err());
        assert!(parse_vertex_count("four").is_err());
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("12"), Ok(Weight::finite(12)));
        assert_eq!(parse_weight(""), Ok(Weight::Infinity));
        assert_eq!(parse_weight("∞"), Ok(Weight::Infinity));
        assert_eq!(parse_weight("Inf"), Ok(Weight::Infinity));
        assert!(parse_weight("-2").is_err());
    }

    #[test]
    fn test_parse_symmetry_policy() {
        assert_eq!(
            parse_symmetry_policy("row-major"),
            Ok(SymmetryPolicy::RowMajorFill)
        );
        assert_eq!(parse_symmetry_policy("Minimum"), Ok(SymmetryPolicy::Minimum));
        assert!(parse_symmetry_policy("average").is_err());
    }
}
