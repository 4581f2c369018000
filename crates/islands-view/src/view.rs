//! Fixed-dimension strided views.

use std::cell::Cell;
use std::ops::Range;

use crate::axis::{step_offset, Axis, Index, Span};
use crate::buffer::Buffer;
use crate::dynamic::DynView;
use crate::error::ViewError;
use crate::lanes::{Lanes, Values};

/// Axis of a 2D view that indexes rows. Its length is the grid height.
pub const HEIGHT: usize = 0;

/// Axis of a 2D view that indexes columns. Its length is the grid width.
pub const WIDTH: usize = 1;

/// An `N`-dimensional window onto a [`Buffer`].
///
/// Cell `[i0, i1, ..]` lives at buffer position
/// `offset + i0 * axes[0].stride + i1 * axes[1].stride + ..`. Every
/// constructor and slicing operation keeps all addressable cells inside
/// the buffer, so reads through a view never go out of range.
///
/// Views are cheap to clone: a clone copies the descriptor and bumps the
/// buffer's reference count.
#[derive(Clone, Debug)]
pub struct View<const N: usize> {
    buffer: Buffer,
    offset: isize,
    axes: [Axis; N],
}

impl<const N: usize> View<N> {
    /// Build a view, checking that every addressable cell lies in `buffer`.
    ///
    /// A view with any zero-length axis addresses no cells and is always
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBuffer`] if some cell would fall outside
    /// the buffer.
    pub fn new(buffer: Buffer, offset: isize, axes: [Axis; N]) -> Result<Self, ViewError> {
        let mut low = offset;
        let mut high = offset;
        for axis in &axes {
            match axis.extent() {
                Some((min, max)) => {
                    low = low.saturating_add(min);
                    high = high.saturating_add(max);
                }
                None => return Ok(Self::from_parts(buffer, offset, axes)),
            }
        }
        if low < 0 {
            return Err(ViewError::OutOfBuffer {
                offset: low,
                len: buffer.len(),
            });
        }
        if high >= buffer.len() as isize {
            return Err(ViewError::OutOfBuffer {
                offset: high,
                len: buffer.len(),
            });
        }
        Ok(Self::from_parts(buffer, offset, axes))
    }

    /// Assemble a view from parts already known to be in range.
    pub(crate) fn from_parts(buffer: Buffer, offset: isize, axes: [Axis; N]) -> Self {
        Self {
            buffer,
            offset,
            axes,
        }
    }

    /// The shared storage.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Buffer position of cell `[0, 0, ..]`.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// All axis descriptors, in axis order.
    pub fn axes(&self) -> &[Axis; N] {
        &self.axes
    }

    /// One axis descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::AxisOutOfRange`] if `axis >= N`.
    pub fn axis(&self, axis: usize) -> Result<Axis, ViewError> {
        self.axes
            .get(axis)
            .copied()
            .ok_or(ViewError::AxisOutOfRange { axis, ndim: N })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        N
    }

    /// Number of addressable cells, saturating at `usize::MAX` for
    /// broadcast axes.
    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.axes.iter().fold(1, |cells, a| cells.saturating_mul(a.len))
    }

    /// Whether the view addresses no cells.
    pub fn is_empty(&self) -> bool {
        self.axes.iter().any(|a| a.len == 0)
    }

    /// Whether every axis has length 1, i.e. the view names exactly one cell.
    pub fn is_scalar(&self) -> bool {
        self.axes.iter().all(|a| a.len == 1)
    }

    /// Slice every axis at once.
    ///
    /// # Errors
    ///
    /// Fails if any position or sub-range does not fit its axis.
    pub fn index(&self, indices: [Index; N]) -> Result<Self, ViewError> {
        let mut view = self.clone();
        for (axis, index) in indices.into_iter().enumerate() {
            view.apply(axis, index)?;
        }
        Ok(view)
    }

    /// Slice a single axis, leaving the others whole.
    ///
    /// # Errors
    ///
    /// Fails if `axis` does not exist or `index` does not fit it.
    pub fn slice_axis(&self, axis: usize, index: impl Into<Index>) -> Result<Self, ViewError> {
        if axis >= N {
            return Err(ViewError::AxisOutOfRange { axis, ndim: N });
        }
        let mut view = self.clone();
        view.apply(axis, index.into())?;
        Ok(view)
    }

    fn apply(&mut self, axis: usize, index: Index) -> Result<(), ViewError> {
        let shift = match index {
            Index::All => 0,
            Index::At(position) => self.axes[axis].pin(axis, position)?,
            Index::Span(span) => self.axes[axis].restrict(axis, span)?,
        };
        self.offset = self.offset.saturating_add(shift);
        Ok(())
    }

    /// Exchange two axes.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::AxisOutOfRange`] if either axis does not exist.
    pub fn swap_axes(&self, a: usize, b: usize) -> Result<Self, ViewError> {
        for axis in [a, b] {
            if axis >= N {
                return Err(ViewError::AxisOutOfRange { axis, ndim: N });
            }
        }
        let mut view = self.clone();
        view.axes.swap(a, b);
        Ok(view)
    }

    /// Drop the listed axes, each of which must have length 1, producing an
    /// `M`-dimensional view of the same cells.
    ///
    /// # Errors
    ///
    /// - [`ViewError::AxisOutOfRange`] if a listed axis does not exist.
    /// - [`ViewError::DimensionMismatch`] if the remaining axes are not `M`.
    /// - [`ViewError::NotUnitAxis`] if a listed axis is longer (or shorter) than 1.
    pub fn coerce<const M: usize>(&self, dropped: &[usize]) -> Result<View<M>, ViewError> {
        if let Some(&axis) = dropped.iter().find(|&&axis| axis >= N) {
            return Err(ViewError::AxisOutOfRange { axis, ndim: N });
        }
        let kept = (0..N).filter(|axis| !dropped.contains(axis)).count();
        if kept != M {
            return Err(ViewError::DimensionMismatch {
                expected: M,
                found: kept,
            });
        }
        let mut axes = [Axis::UNIT; M];
        let mut next = 0;
        for (index, axis) in self.axes.iter().enumerate() {
            if dropped.contains(&index) {
                if axis.len != 1 {
                    return Err(ViewError::NotUnitAxis {
                        axis: index,
                        len: axis.len,
                    });
                }
            } else {
                axes[next] = *axis;
                next += 1;
            }
        }
        Ok(View::from_parts(self.buffer.clone(), self.offset, axes))
    }

    /// Iterate the sub-views obtained by fixing `axis` at each of its
    /// positions in turn, with that axis removed (`M` must be `N - 1`).
    ///
    /// # Errors
    ///
    /// Fails if `axis` does not exist or `M + 1 != N`.
    pub fn lanes<const M: usize>(&self, axis: usize) -> Result<Lanes<M>, ViewError> {
        let along = self.axis(axis)?;
        if M + 1 != N {
            return Err(ViewError::DimensionMismatch {
                expected: M + 1,
                found: N,
            });
        }
        let mut axes = [Axis::UNIT; M];
        for (slot, rest) in axes
            .iter_mut()
            .zip(self.axes.iter().enumerate().filter(|&(i, _)| i != axis))
        {
            *slot = *rest.1;
        }
        let template = View::from_parts(self.buffer.clone(), self.offset, axes);
        Ok(Lanes::new(template, along))
    }

    /// Forget the compile-time dimension.
    pub fn to_dyn(&self) -> DynView {
        DynView::from_parts(self.buffer.clone(), self.offset, self.axes.iter().copied().collect())
    }

    /// All cell values, last axis fastest.
    pub fn values(&self) -> Values<'_, N> {
        Values::new(self)
    }

    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.values().filter(|&v| v).count()
    }

    fn position(&self, coords: [usize; N]) -> Result<usize, ViewError> {
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
        Ok(position as usize)
    }

    /// Read the cell at `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] if a coordinate is past its axis.
    pub fn get(&self, coords: [usize; N]) -> Result<bool, ViewError> {
        let position = self.position(coords)?;
        Ok(self.buffer.cell(position).get())
    }

    /// Write the cell at `coords`. Every view aliasing that cell sees the
    /// new value.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] if a coordinate is past its axis.
    pub fn set(&self, coords: [usize; N], value: bool) -> Result<(), ViewError> {
        let position = self.position(coords)?;
        self.buffer.cell(position).set(value);
        Ok(())
    }

    /// The single cell named by a scalar view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotUnitAxis`] for the first axis whose length is not 1.
    pub fn cell(&self) -> Result<&Cell<bool>, ViewError> {
        if let Some((axis, desc)) = self.axes.iter().enumerate().find(|(_, a)| a.len != 1) {
            return Err(ViewError::NotUnitAxis {
                axis,
                len: desc.len,
            });
        }
        Ok(self.buffer.cell(self.offset as usize))
    }

    /// Buffer position of the first cell. Only meaningful for non-empty views.
    pub(crate) fn start(&self) -> usize {
        self.offset as usize
    }

    /// Move the view by `shift` buffer positions. Callers guarantee the
    /// moved view stays in range.
    pub(crate) fn shifted(&self, shift: isize) -> Self {
        Self::from_parts(self.buffer.clone(), self.offset.saturating_add(shift), self.axes)
    }
}

impl<const N: usize> PartialEq for View<N> {
    /// Views are equal when they describe the same cells of the same storage.
    fn eq(&self, other: &Self) -> bool {
        Buffer::same(&self.buffer, &other.buffer)
            && self.offset == other.offset
            && self.axes == other.axes
    }
}

impl View<0> {
    /// Value of the single cell.
    pub fn value(&self) -> bool {
        self.buffer.cell(self.start()).get()
    }

    /// Overwrite the single cell.
    pub fn set_value(&self, value: bool) {
        self.buffer.cell(self.start()).set(value);
    }
}

impl View<1> {
    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.axes[0].len
    }
}

impl View<2> {
    /// A row-major `height × width` grid over `buffer`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::ShapeOverflow`] if `height × width` is not addressable.
    /// - [`ViewError::SizeMismatch`] unless `buffer.len() == height * width`.
    pub fn row_major(buffer: Buffer, height: usize, width: usize) -> Result<Self, ViewError> {
        let overflow = ViewError::ShapeOverflow { height, width };
        let expected = height.checked_mul(width).ok_or_else(|| overflow.clone())?;
        let row_stride = isize::try_from(width).map_err(|_| overflow)?;
        if buffer.len() != expected {
            return Err(ViewError::SizeMismatch {
                expected,
                found: buffer.len(),
            });
        }
        Self::new(
            buffer,
            0,
            [Axis::new(height, row_stride), Axis::new(width, 1)],
        )
    }

    /// Copy `rows` into a fresh buffer and view it as a grid.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::RaggedRows`] if the rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ViewError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != width)
        {
            return Err(ViewError::RaggedRows {
                row,
                expected: width,
                found: r.as_ref().len(),
            });
        }
        let buffer = Buffer::from_bools(rows.iter().flat_map(|r| r.as_ref().iter().copied()));
        Self::row_major(buffer, rows.len(), width)
    }

    /// A fresh `height × width` grid of `false` cells.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ShapeOverflow`] if the cell count exceeds what a
    /// buffer can hold.
    pub fn falses(height: usize, width: usize) -> Result<Self, ViewError> {
        let cells = height
            .checked_mul(width)
            .filter(|&cells| isize::try_from(cells).is_ok())
            .ok_or(ViewError::ShapeOverflow { height, width })?;
        Self::row_major(Buffer::falses(cells), height, width)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.axes[HEIGHT].len
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.axes[WIDTH].len
    }

    /// Row `index` as a line.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] if `index >= height()`.
    pub fn row(&self, index: usize) -> Result<View<1>, ViewError> {
        self.slice_axis(HEIGHT, index)?.coerce(&[HEIGHT])
    }

    /// Column `index` as a line.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] if `index >= width()`.
    pub fn col(&self, index: usize) -> Result<View<1>, ViewError> {
        self.slice_axis(WIDTH, index)?.coerce(&[WIDTH])
    }

    /// The rows in `range`, full width.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SpanOutOfBounds`] if `range` does not fit the height.
    pub fn rows_range(&self, range: Range<usize>) -> Result<Self, ViewError> {
        self.index([Index::Span(Span::from(range)), Index::All])
    }

    /// The same cells with rows and columns exchanged.
    pub fn transposed(&self) -> Self {
        let mut view = self.clone();
        view.axes.swap(HEIGHT, WIDTH);
        view
    }

    /// Every row, top to bottom.
    pub fn rows(&self) -> Lanes<1> {
        Lanes::new(
            View::from_parts(self.buffer.clone(), self.offset, [self.axes[WIDTH]]),
            self.axes[HEIGHT],
        )
    }

    /// Every column, left to right.
    pub fn cols(&self) -> Lanes<1> {
        Lanes::new(
            View::from_parts(self.buffer.clone(), self.offset, [self.axes[HEIGHT]]),
            self.axes[WIDTH],
        )
    }

    /// View a grid with at most one non-unit axis as a line.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DimensionMismatch`] if both axes are longer than 1.
    pub fn line(&self) -> Result<View<1>, ViewError> {
        self.to_dyn().squeeze().fix()
    }
}
