//! Views whose dimension is chosen at runtime.

use smallvec::SmallVec;

use crate::axis::{step_offset, Axis};
use crate::buffer::Buffer;
use crate::error::ViewError;
use crate::view::View;

/// Axis storage for a [`DynView`]. Grids rarely exceed four axes.
pub type DynAxes = SmallVec<[Axis; 4]>;

/// A view with a runtime number of axes.
///
/// Obtained from [`View::to_dyn`]; mainly used to [`squeeze`](DynView::squeeze)
/// away unit axes and then [`fix`](DynView::fix) the dimension again.
#[derive(Clone, Debug)]
pub struct DynView {
    buffer: Buffer,
    offset: isize,
    axes: DynAxes,
}

impl DynView {
    pub(crate) fn from_parts(buffer: Buffer, offset: isize, axes: DynAxes) -> Self {
        Self {
            buffer,
            offset,
            axes,
        }
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Axis descriptors in order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of addressable cells.
    pub fn cell_count(&self) -> usize {
        if self.axes.iter().any(|a| a.len == 0) {
            return 0;
        }
        self.axes.iter().fold(1, |cells, a| cells.saturating_mul(a.len))
    }

    /// Remove every axis of length 1. Zero-length axes are kept.
    pub fn squeeze(mut self) -> Self {
        self.axes.retain(|a| a.len != 1);
        self
    }

    /// Fix the dimension at `N`, padding with unit axes when fewer remain.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DimensionMismatch`] if the view has more than `N` axes.
    pub fn fix<const N: usize>(&self) -> Result<View<N>, ViewError> {
        if self.axes.len() > N {
            return Err(ViewError::DimensionMismatch {
                expected: N,
                found: self.axes.len(),
            });
        }
        let mut axes = [Axis::UNIT; N];
        axes[..self.axes.len()].copy_from_slice(&self.axes);
        Ok(View::from_parts(self.buffer.clone(), self.offset, axes))
    }

    /// Read the cell at `coords`.
    ///
    /// # Errors
    ///
    /// Fails if `coords` has the wrong length or a coordinate is past its axis.
    pub fn get(&self, coords: &[usize]) -> Result<bool, ViewError> {
        if coords.len() != self.axes.len() {
            return Err(ViewError::DimensionMismatch {
                expected: self.axes.len(),
                found: coords.len(),
            });
        }
        let mut position = self.offset;
        for (axis, (&index, desc)) in coords.iter().zip(&self.axes).enumerate() {
            if index >= desc.len {
                return Err(ViewError::IndexOutOfBounds {
                    axis,
                    index,
                    len: desc.len,
                });
            }
            position = position.saturating_add(step_offset(index, desc.stride));
        }
        Ok(self.buffer.cell(position as usize).get())
    }
}
