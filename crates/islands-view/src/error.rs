//! Error types for view construction and slicing.

use std::error::Error;
use std::fmt;

/// Errors arising from building, slicing or reshaping a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The view would address a cell outside its buffer.
    OutOfBuffer {
        /// The first out-of-range flat offset.
        offset: isize,
        /// Length of the buffer.
        len: usize,
    },
    /// An axis number that the view does not have.
    AxisOutOfRange {
        /// The requested axis.
        axis: usize,
        /// Number of axes in the view.
        ndim: usize,
    },
    /// A position index past the end of its axis.
    IndexOutOfBounds {
        /// Axis being indexed.
        axis: usize,
        /// The requested position.
        index: usize,
        /// Length of the axis.
        len: usize,
    },
    /// A sub-range whose extent exceeds the axis it slices.
    SpanOutOfBounds {
        /// Axis being sliced.
        axis: usize,
        /// First position of the sub-range.
        start: usize,
        /// Number of positions in the sub-range.
        len: usize,
        /// Distance between consecutive positions.
        step: usize,
        /// Length of the axis.
        available: usize,
    },
    /// A sub-range with a step of zero.
    ZeroStep {
        /// Axis being sliced.
        axis: usize,
    },
    /// Coercion asked to drop an axis whose length is not 1.
    NotUnitAxis {
        /// The axis that could not be dropped.
        axis: usize,
        /// Its actual length.
        len: usize,
    },
    /// The view does not have the number of axes the operation needs.
    DimensionMismatch {
        /// Axes required.
        expected: usize,
        /// Axes present.
        found: usize,
    },
    /// Rows of unequal length passed to a row-major constructor.
    RaggedRows {
        /// Index of the first row with the wrong length.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A grid shape whose cell count or row stride does not fit the
    /// address space.
    ShapeOverflow {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// Buffer length does not match the requested shape.
    SizeMismatch {
        /// Cells required by the shape.
        expected: usize,
        /// Cells present in the buffer.
        found: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBuffer { offset, len } => {
                write!(f, "offset {offset} outside buffer of length {len}")
            }
            Self::AxisOutOfRange { axis, ndim } => {
                write!(f, "axis {axis} out of range for {ndim}-dimensional view")
            }
            Self::IndexOutOfBounds { axis, index, len } => {
                write!(f, "index {index} out of bounds on axis {axis} of length {len}")
            }
            Self::SpanOutOfBounds {
                axis,
                start,
                len,
                step,
                available,
            } => write!(
                f,
                "span start={start} len={len} step={step} exceeds axis {axis} of length {available}"
            ),
            Self::ZeroStep { axis } => write!(f, "span on axis {axis} has zero step"),
            Self::NotUnitAxis { axis, len } => {
                write!(f, "axis {axis} has length {len}, expected 1")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "expected {expected} axes, found {found}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::ShapeOverflow { height, width } => {
                write!(f, "{height}x{width} grid exceeds the address space")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "shape needs {expected} cells, buffer holds {found}")
            }
        }
    }
}

impl Error for ViewError {}
