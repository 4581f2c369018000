//! Reference counter by flood fill.
//!
//! The grid is copied into a private buffer with a one-cell `false`
//! border, so the four neighbours of any interior cell are always
//! addressable. Each set cell found in scan order starts a new island,
//! and the whole island is cleared with an explicit stack before the scan
//! continues. The caller's buffer is never written.

use islands_view::{View, ViewError};
use log::debug;

use crate::error::SolveError;

/// Count the islands in `grid`.
///
/// Uses O(height × width) auxiliary memory.
///
/// # Errors
///
/// Returns [`ViewError::ShapeOverflow`] (wrapped) when the padded copy
/// would not fit in memory, e.g. for a grid broadcast from a few cells.
pub fn count(grid: &View<2>) -> Result<usize, SolveError> {
    let (height, width) = (grid.height(), grid.width());
    if grid.is_empty() {
        return Ok(0);
    }
    let field = padded_copy(grid)?;

    let mut islands = 0;
    let mut stack: Vec<[usize; 2]> = Vec::new();
    for row in 1..=height {
        for col in 1..=width {
            if !field.get([row, col])? {
                continue;
            }
            islands += 1;
            field.set([row, col], false)?;
            stack.push([row, col]);
            while let Some([r, c]) = stack.pop() {
                for neighbour in [[r - 1, c], [r + 1, c], [r, c - 1], [r, c + 1]] {
                    if field.get(neighbour)? {
                        field.set(neighbour, false)?;
                        stack.push(neighbour);
                    }
                }
            }
        }
    }
    debug!("flood-fill: {height}x{width} grid, {islands} islands");
    Ok(islands)
}

/// A fresh `(height + 2) × (width + 2)` grid holding `grid` in its interior.
fn padded_copy(grid: &View<2>) -> Result<View<2>, SolveError> {
    let (height, width) = (grid.height(), grid.width());
    let (Some(padded_height), Some(padded_width)) = (height.checked_add(2), width.checked_add(2))
    else {
        return Err(ViewError::ShapeOverflow { height, width }.into());
    };
    let field = View::falses(padded_height, padded_width)?;
    let interior = field.index([(1..height + 1).into(), (1..width + 1).into()])?;
    for (src, dst) in grid.rows().zip(interior.rows()) {
        for (col, value) in src.values().enumerate() {
            if value {
                dst.set([col], true)?;
            }
        }
    }
    Ok(field)
}
