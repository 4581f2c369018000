//! Test utilities for island counter development.
//!
//! - [`fixtures`]: hand-checked grids with their island counts.
//! - [`grid_from_str`] / [`render`]: text form of a grid for readable tests.
//! - [`GridGenerator`]: seeded random grids for property tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generator;

pub use fixtures::{fixtures, Fixture};
pub use generator::{GridGenConfig, GridGenerator};

use islands_view::{View, ViewError};

/// Build a grid from rows of text, `'1'` for a set cell and anything else
/// for a clear one.
///
/// # Errors
///
/// Returns [`ViewError::RaggedRows`] if the rows differ in length.
pub fn grid_from_str(rows: &[&str]) -> Result<View<2>, ViewError> {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c == '1').collect())
        .collect();
    View::from_rows(&rows)
}

/// Render a grid as `0`/`1` rows separated by newlines.
pub fn render(grid: &View<2>) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.values().map(|v| if v { '1' } else { '0' }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let rows = ["0110", "1001"];
        let grid = grid_from_str(&rows).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 4));
        assert_eq!(render(&grid), "0110\n1001");
        assert_eq!(render(&grid.transposed()), "01\n10\n10\n01");
    }

    #[test]
    fn ragged_text_is_rejected() {
        assert!(matches!(
            grid_from_str(&["01", "0"]),
            Err(ViewError::RaggedRows { row: 1, .. })
        ));
    }

    #[test]
    fn every_fixture_parses() {
        for fixture in fixtures() {
            let grid = fixture.grid().unwrap();
            assert_eq!(grid.height(), fixture.rows.len(), "{}", fixture.name);
        }
    }
}
