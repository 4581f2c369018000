//! Solver error types.

use std::error::Error;
use std::fmt;

use islands_core::ForestError;
use islands_view::ViewError;

use crate::config::{Algorithm, ConfigError};

/// Errors from the island counters and the merge contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Slicing or reshaping a view failed.
    View(ViewError),
    /// A forest lookup used an id it never issued.
    Forest(ForestError),
    /// Solver configuration is invalid.
    Config(ConfigError),
    /// Merge operands are views of different buffers.
    ForeignBuffer,
    /// Merge operands have different widths.
    WidthMismatch {
        /// Width of the upper region.
        top: usize,
        /// Width of the lower region.
        bottom: usize,
    },
    /// Merge operands step through the buffer differently.
    StrideMismatch {
        /// Axis whose strides differ.
        axis: usize,
        /// Stride in the upper region.
        top: isize,
        /// Stride in the lower region.
        bottom: isize,
    },
    /// The lower region does not begin on the row after the upper one ends.
    NotAdjacent {
        /// Offset at which the lower region should start.
        expected_offset: isize,
        /// Offset at which it does start.
        found_offset: isize,
    },
    /// A zero-height region reached the recursive solver or the merge.
    EmptyRegion,
    /// A `true` seam cell carries no island label.
    MissingLabel {
        /// Column of the unlabelled cell.
        column: usize,
    },
    /// The grid has more cells than island ids can number.
    CellCountOverflow {
        /// Number of cells in the grid.
        cells: usize,
    },
    /// Cross-checked solvers returned different counts.
    Disagreement {
        /// Each solver's count, in the order they ran.
        counts: Vec<(Algorithm, usize)>,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(e) => write!(f, "view: {e}"),
            Self::Forest(e) => write!(f, "forest: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ForeignBuffer => write!(f, "merge operands do not share a buffer"),
            Self::WidthMismatch { top, bottom } => {
                write!(f, "merge width mismatch: top {top}, bottom {bottom}")
            }
            Self::StrideMismatch { axis, top, bottom } => {
                write!(f, "merge stride mismatch on axis {axis}: top {top}, bottom {bottom}")
            }
            Self::NotAdjacent {
                expected_offset,
                found_offset,
            } => write!(
                f,
                "merge regions not adjacent: bottom starts at {found_offset}, expected {expected_offset}"
            ),
            Self::EmptyRegion => write!(f, "region has zero height"),
            Self::MissingLabel { column } => {
                write!(f, "seam cell in column {column} is set but unlabelled")
            }
            Self::CellCountOverflow { cells } => {
                write!(f, "grid of {cells} cells exceeds island id space")
            }
            Self::Disagreement { counts } => {
                write!(f, "solvers disagree:")?;
                for (algorithm, count) in counts {
                    write!(f, " {algorithm}={count}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(e) => Some(e),
            Self::Forest(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ViewError> for SolveError {
    fn from(e: ViewError) -> Self {
        Self::View(e)
    }
}

impl From<ForestError> for SolveError {
    fn from(e: ForestError) -> Self {
        Self::Forest(e)
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
