//! Text rendering of result matrices and paths.
//!
//! Vertices are labelled 1-based, as users number them.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use num_traits::Float;
use std::fmt::{Debug, Display};

use crate::algorithm::{DistanceMatrix, SuccessorMatrix};

/// Glyph shown for an absent edge or unreachable pair
pub const INFINITY_GLYPH: &str = "∞";

/// Formats a weight, with `∞` for `+∞`
pub fn format_weight<W>(weight: W) -> String
where
    W: Float + Display,
{
    if weight == W::infinity() {
        INFINITY_GLYPH.to_string()
    } else {
        weight.to_string()
    }
}

/// Formats a vertex sequence as `1 → 2 → 3`
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a styled table with consistent formatting.
fn create_table(size: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("")];
    header.extend((1..=size).map(|v| Cell::new(v).fg(Color::Cyan)));
    table.set_header(header);
    table
}

/// Builds the distance table, `∞` marking unreachable pairs
pub fn distance_table<W>(distances: &DistanceMatrix<W>) -> Table
where
    W: Float + Debug + Display,
{
    let mut table = create_table(distances.size());
    for from in 0..distances.size() {
        let mut row = vec![Cell::new(from + 1).fg(Color::Green)];
        row.extend(distances.row(from).iter().map(|d| Cell::new(format_weight(*d))));
        table.add_row(row);
    }
    table
}

/// Builds the successor table with 1-based next hops.
///
/// Unreachable pairs show their nominal successor, the target itself.
pub fn successor_table(successors: &SuccessorMatrix) -> Table {
    let mut table = create_table(successors.size());
    for from in 0..successors.size() {
        let mut row = vec![Cell::new(from + 1).fg(Color::Green)];
        row.extend(successors.row(from).iter().map(|s| Cell::new(s + 1)));
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_all_pairs_shortest_paths;
    use crate::NO_EDGE;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(NO_EDGE), "∞");
        assert_eq!(format_weight(3.0), "3");
        assert_eq!(format_weight(-2.0), "-2");
        assert_eq!(format_weight(1.5), "1.5");
    }

    #[test]
    fn test_format_path_is_one_based() {
        assert_eq!(format_path(&[0, 1, 2]), "1 → 2 → 3");
        assert_eq!(format_path(&[4]), "5");
    }

    #[test]
    fn test_tables_contain_glyphs_and_labels() {
        let result = compute_all_pairs_shortest_paths(vec![
            vec![0.0, 1.0, 5.0],
            vec![NO_EDGE, 0.0, 1.0],
            vec![NO_EDGE, NO_EDGE, 0.0],
        ])
        .unwrap();

        let distances = distance_table(&result.distances).to_string();
        assert!(distances.contains('∞'));
        assert!(distances.contains('2'));

        let successors = successor_table(&result.successors).to_string();
        assert!(successors.contains('3'));
        assert!(!successors.contains('∞'));
    }
}
