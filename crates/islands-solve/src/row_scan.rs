//! Single-pass row scan.
//!
//! Rows are visited top to bottom, cells left to right. Each `true` cell
//! takes its label from the cell to its left or the cell above; when both
//! are labelled the two islands are coalesced in the forest. Only the
//! labels of the previous row are kept, in one of two line buffers that
//! swap roles after every row, so auxiliary memory is O(width).

use islands_core::{DisjointForest, ForestError, Label};
use islands_view::View;
use log::debug;

use crate::error::SolveError;
use crate::ensure_id_space;

/// Count the islands in `grid`.
///
/// # Errors
///
/// Returns [`SolveError::CellCountOverflow`] for grids too large to label.
pub fn count(grid: &View<2>) -> Result<usize, SolveError> {
    ensure_id_space(grid)?;
    let width = grid.width();
    let mut forest = DisjointForest::new();
    let mut prev_line: Vec<Label> = vec![None; width];
    let mut cur_line: Vec<Label> = vec![None; width];
    for row in grid.rows() {
        scan_row(&row, &prev_line, &mut cur_line, &mut forest)?;
        std::mem::swap(&mut prev_line, &mut cur_line);
    }
    let islands = forest.count_roots();
    debug!(
        "row-scan: {}x{} grid, {} ids issued, {islands} islands",
        grid.height(),
        width,
        forest.len()
    );
    Ok(islands)
}

/// Label one row given the labels of the row above, writing into `out`.
fn scan_row(
    row: &View<1>,
    above: &[Label],
    out: &mut [Label],
    forest: &mut DisjointForest,
) -> Result<(), ForestError> {
    let mut left: Label = None;
    for ((cell, &up), slot) in row.values().zip(above).zip(out.iter_mut()) {
        left = match (cell, up, left) {
            (false, _, _) => None,
            (true, None, None) => Some(forest.add_new()),
            (true, None, Some(l)) => Some(l),
            (true, Some(a), None) => Some(a),
            (true, Some(a), Some(l)) => {
                forest.coalesce(l, a)?;
                Some(l)
            }
        };
        *slot = left;
    }
    Ok(())
}
