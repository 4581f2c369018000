//! Divide-and-conquer counting.
//!
//! A region is split into an upper and a lower half along its rows. Each
//! half is solved independently into a [`PartialSolution`], which keeps
//! only the labels of its first and last rows plus a count of islands
//! that can no longer reach either edge. Merging two halves joins the
//! labels that meet across the seam and renumbers the survivors.
//!
//! Edge labels are compact: a solution with `labels_used == k` uses
//! exactly the ids `0..k`, numbered in order of first appearance along
//! the top edge and then the bottom edge.

use indexmap::IndexSet;
use islands_core::{DisjointForest, ForestError, IslandId, Label};
use islands_view::{Axis, Buffer, View, HEIGHT, WIDTH};
use log::{debug, trace};

use crate::ensure_id_space;
use crate::error::SolveError;

/// Islands of a contiguous band of rows, summarised by its edges.
#[derive(Clone, Debug)]
pub struct PartialSolution {
    region: View<2>,
    top_edge: Vec<Label>,
    bottom_edge: Vec<Label>,
    labels_used: usize,
    interior_count: usize,
}

impl PartialSolution {
    /// The rows this solution covers.
    pub fn region(&self) -> &View<2> {
        &self.region
    }

    /// Labels of the first row, one per column.
    pub fn top_edge(&self) -> &[Label] {
        &self.top_edge
    }

    /// Labels of the last row, one per column.
    ///
    /// For a single-row region this is the same row as [`top_edge`](Self::top_edge).
    pub fn bottom_edge(&self) -> &[Label] {
        &self.bottom_edge
    }

    /// Number of distinct islands touching either edge.
    pub fn labels_used(&self) -> usize {
        self.labels_used
    }

    /// Number of islands touching neither edge.
    pub fn interior_count(&self) -> usize {
        self.interior_count
    }

    /// Total islands in the region.
    pub fn island_count(&self) -> usize {
        self.interior_count + self.labels_used
    }

    /// Shift every label by `shift`, leaving blanks alone.
    fn renumber(&mut self, shift: u32) {
        for label in self.top_edge.iter_mut().chain(self.bottom_edge.iter_mut()) {
            *label = label.map(|id| id.offset(shift));
        }
    }

    /// Replace each label with its compact root index in `forest`.
    ///
    /// Roots are traced once per raw id; `trace_root` does not compress.
    fn normalize(&mut self, forest: &DisjointForest) -> Result<(), ForestError> {
        let mut compact: Vec<Label> = vec![None; forest.len()];
        let mut roots: IndexSet<IslandId> = IndexSet::new();
        for label in self.top_edge.iter_mut().chain(self.bottom_edge.iter_mut()) {
            let Some(id) = label else { continue };
            if let Some(&Some(cached)) = compact.get(id.index()) {
                *id = cached;
                continue;
            }
            let root = forest.trace_root(*id)?;
            let (index, _) = roots.insert_full(root);
            let renamed = IslandId(index as u32);
            compact[id.index()] = Some(renamed);
            *id = renamed;
        }
        self.labels_used = roots.len();
        Ok(())
    }
}

/// Count the islands in `grid`.
///
/// Grids taller than they are wide are transposed first so the recursion
/// splits the longer axis.
///
/// # Errors
///
/// Returns [`SolveError::CellCountOverflow`] for grids too large to label.
pub fn count(grid: &View<2>) -> Result<usize, SolveError> {
    ensure_id_space(grid)?;
    if grid.is_empty() {
        return Ok(0);
    }
    let grid = if grid.height() > grid.width() {
        grid.transposed()
    } else {
        grid.clone()
    };
    let solution = solve_rows(&grid)?;
    let islands = solution.island_count();
    debug!(
        "divide-and-conquer: {}x{} grid, {islands} islands",
        grid.height(),
        grid.width()
    );
    Ok(islands)
}

/// Solve `region` recursively, splitting at half its height.
///
/// # Errors
///
/// Returns [`SolveError::EmptyRegion`] for a zero-height region and
/// [`SolveError::CellCountOverflow`] for regions too large to label.
pub fn solve_partial(region: &View<2>) -> Result<PartialSolution, SolveError> {
    ensure_id_space(region)?;
    solve_rows(region)
}

fn solve_rows(region: &View<2>) -> Result<PartialSolution, SolveError> {
    match region.height() {
        0 => Err(SolveError::EmptyRegion),
        1 => solve_line(region),
        height => {
            let split = height / 2;
            let top = solve_rows(&region.rows_range(0..split)?)?;
            let bottom = solve_rows(&region.rows_range(split..height)?)?;
            merge(top, bottom)
        }
    }
}

/// Single row: every maximal run of set cells is its own island.
fn solve_line(region: &View<2>) -> Result<PartialSolution, SolveError> {
    let line = region.line()?;
    let mut labels = Vec::with_capacity(line.len());
    let mut runs = 0u32;
    let mut current: Label = None;
    for cell in line.values() {
        current = match (cell, current) {
            (false, _) => None,
            (true, Some(id)) => Some(id),
            (true, None) => {
                runs += 1;
                Some(IslandId(runs - 1))
            }
        };
        labels.push(current);
    }
    Ok(PartialSolution {
        region: region.clone(),
        top_edge: labels.clone(),
        bottom_edge: labels,
        labels_used: runs as usize,
        interior_count: 0,
    })
}

/// Combine two solutions whose regions are vertically adjacent in one buffer.
///
/// # Errors
///
/// Fails when the regions do not share a buffer, width and strides, when
/// `bottom` does not start on the row after `top` ends, or when a set
/// seam cell is unlabelled.
pub fn merge(top: PartialSolution, bottom: PartialSolution) -> Result<PartialSolution, SolveError> {
    let region = joined_region(&top.region, &bottom.region)?;
    let mut bottom = bottom;
    bottom.renumber(top.labels_used as u32);

    let mut forest = DisjointForest::with_roots(top.labels_used + bottom.labels_used);
    let upper = top.region.row(top.region.height() - 1)?;
    let lower = bottom.region.row(0)?;
    let seam = upper
        .values()
        .zip(lower.values())
        .zip(top.bottom_edge.iter().zip(&bottom.top_edge));
    for (column, ((above, below), (&a, &b))) in seam.enumerate() {
        if !(above && below) {
            continue;
        }
        match (a, b) {
            (Some(a), Some(b)) => forest.coalesce(a, b)?,
            _ => return Err(SolveError::MissingLabel { column }),
        }
    }

    let islands = forest.count_roots();
    let mut merged = PartialSolution {
        region,
        top_edge: top.top_edge,
        bottom_edge: bottom.bottom_edge,
        labels_used: 0,
        interior_count: top.interior_count + bottom.interior_count + islands,
    };
    merged.normalize(&forest)?;
    debug_assert!(merged.labels_used <= islands);
    merged.interior_count -= merged.labels_used;
    trace!(
        "merge: {} + {} rows, forest of {}, {} edge labels, {} enclosed",
        top.region.height(),
        bottom.region.height(),
        forest.len(),
        merged.labels_used,
        merged.interior_count
    );
    Ok(merged)
}

/// The region spanning `top` followed directly by `bottom`.
fn joined_region(top: &View<2>, bottom: &View<2>) -> Result<View<2>, SolveError> {
    if !Buffer::same(top.buffer(), bottom.buffer()) {
        return Err(SolveError::ForeignBuffer);
    }
    if top.height() == 0 || bottom.height() == 0 {
        return Err(SolveError::EmptyRegion);
    }
    if top.width() != bottom.width() {
        return Err(SolveError::WidthMismatch {
            top: top.width(),
            bottom: bottom.width(),
        });
    }
    for axis in [HEIGHT, WIDTH] {
        let (t, b) = (top.axes()[axis].stride, bottom.axes()[axis].stride);
        if t != b {
            return Err(SolveError::StrideMismatch {
                axis,
                top: t,
                bottom: b,
            });
        }
    }
    let row_stride = top.axes()[HEIGHT].stride;
    let expected_offset = top.offset() + top.height() as isize * row_stride;
    if bottom.offset() != expected_offset {
        return Err(SolveError::NotAdjacent {
            expected_offset,
            found_offset: bottom.offset(),
        });
    }
    let axes = [
        Axis::new(top.height() + bottom.height(), row_stride),
        top.axes()[WIDTH],
    ];
    Ok(View::new(top.buffer().clone(), top.offset(), axes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> View<2> {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|r| r.bytes().map(|b| b == b'1').collect())
            .collect();
        View::from_rows(&rows).unwrap()
    }

    fn ids(labels: &[Label]) -> Vec<Option<u32>> {
        labels.iter().map(|l| l.map(|id| id.0)).collect()
    }

    #[test]
    fn single_row_labels_runs() {
        let s = solve_partial(&grid(&["0110100111"])).unwrap();
        assert_eq!(
            ids(s.top_edge()),
            vec![None, Some(0), Some(0), None, Some(1), None, None, Some(2), Some(2), Some(2)]
        );
        assert_eq!(s.top_edge(), s.bottom_edge());
        assert_eq!(s.labels_used(), 3);
        assert_eq!(s.interior_count(), 0);
        assert_eq!(s.island_count(), 3);
    }

    #[test]
    fn single_column_row_is_one_cell() {
        let s = solve_partial(&grid(&["1"])).unwrap();
        assert_eq!(ids(s.top_edge()), vec![Some(0)]);
        assert_eq!(s.island_count(), 1);
    }

    #[test]
    fn zero_height_region_is_rejected() {
        let g = grid(&["11", "11"]);
        let empty = g.rows_range(1..1).unwrap();
        assert_eq!(solve_partial(&empty).unwrap_err(), SolveError::EmptyRegion);
    }

    #[test]
    fn merge_joins_across_the_seam() {
        // 1010
        // 1110
        let g = grid(&["1010", "1110"]);
        let top = solve_partial(&g.rows_range(0..1).unwrap()).unwrap();
        let bottom = solve_partial(&g.rows_range(1..2).unwrap()).unwrap();
        let merged = merge(top, bottom).unwrap();
        assert_eq!(merged.region(), &g);
        assert_eq!(ids(merged.top_edge()), vec![Some(0), None, Some(0), None]);
        assert_eq!(ids(merged.bottom_edge()), vec![Some(0), Some(0), Some(0), None]);
        assert_eq!(merged.labels_used(), 1);
        assert_eq!(merged.island_count(), 1);
    }

    #[test]
    fn merge_encloses_islands_that_leave_both_edges() {
        // Middle row island never reaches the outer rows.
        let g = grid(&["100", "010", "001"]);
        let top = solve_partial(&g.rows_range(0..2).unwrap()).unwrap();
        let bottom = solve_partial(&g.rows_range(2..3).unwrap()).unwrap();
        // Top half has two islands: one on each of its edges.
        assert_eq!(top.labels_used(), 2);
        let merged = merge(top, bottom).unwrap();
        assert_eq!(merged.labels_used(), 2);
        assert_eq!(merged.interior_count(), 1);
        assert_eq!(merged.island_count(), 3);
    }

    #[test]
    fn labels_are_compact_in_first_appearance_order() {
        // Right-hand island appears first on the top edge.
        let g = grid(&["0001", "1001", "1000"]);
        let s = solve_partial(&g).unwrap();
        assert_eq!(ids(s.top_edge()), vec![None, None, None, Some(0)]);
        assert_eq!(ids(s.bottom_edge()), vec![Some(1), None, None, None]);
        assert_eq!(s.labels_used(), 2);
    }

    #[test]
    fn merge_rejects_foreign_buffers() {
        let a = solve_partial(&grid(&["11"])).unwrap();
        let b = solve_partial(&grid(&["11"])).unwrap();
        assert_eq!(merge(a, b).unwrap_err(), SolveError::ForeignBuffer);
    }

    #[test]
    fn merge_rejects_non_adjacent_regions() {
        let g = grid(&["10", "01", "10"]);
        let top = solve_partial(&g.rows_range(0..1).unwrap()).unwrap();
        let bottom = solve_partial(&g.rows_range(2..3).unwrap()).unwrap();
        assert_eq!(
            merge(top, bottom).unwrap_err(),
            SolveError::NotAdjacent {
                expected_offset: 2,
                found_offset: 4
            }
        );
    }

    #[test]
    fn merge_rejects_reversed_operands() {
        let g = grid(&["10", "01"]);
        let top = solve_partial(&g.rows_range(0..1).unwrap()).unwrap();
        let bottom = solve_partial(&g.rows_range(1..2).unwrap()).unwrap();
        assert!(matches!(
            merge(bottom, top),
            Err(SolveError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn merge_rejects_width_and_stride_mismatch() {
        let g = grid(&["110", "011"]);
        let top = solve_partial(&g.index([(0..1).into(), (0..2).into()]).unwrap()).unwrap();
        let bottom = solve_partial(&g.rows_range(1..2).unwrap()).unwrap();
        assert_eq!(
            merge(top, bottom).unwrap_err(),
            SolveError::WidthMismatch { top: 2, bottom: 3 }
        );

        let h = grid(&["1010", "0101"]);
        let top = solve_partial(&h.index([(0..1).into(), (0..2).into()]).unwrap()).unwrap();
        let strided = h
            .index([(1..2).into(), islands_view::Span::new(0, 2).step_by(2).into()])
            .unwrap();
        let bottom = solve_partial(&strided).unwrap();
        assert_eq!(
            merge(top, bottom).unwrap_err(),
            SolveError::StrideMismatch {
                axis: WIDTH,
                top: 1,
                bottom: 2
            }
        );
    }

    #[test]
    fn count_handles_empty_and_tall_grids() {
        assert_eq!(count(&View::falses(0, 3).unwrap()).unwrap(), 0);
        assert_eq!(count(&View::falses(3, 0).unwrap()).unwrap(), 0);
        let tall = grid(&["1", "0", "1", "1", "0", "1"]);
        assert_eq!(count(&tall).unwrap(), 3);
    }

    #[test]
    fn coalescing_example() {
        let g = grid(&["01010", "00111", "10010", "01100", "10101"]);
        assert_eq!(count(&g).unwrap(), 6);
        let g = grid(&["01010", "00111", "10110", "01100", "10101"]);
        assert_eq!(count(&g).unwrap(), 5);
    }
}
