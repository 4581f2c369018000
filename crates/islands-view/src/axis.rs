//! Per-axis descriptors and the indices that slice them.

use std::ops::{Range, RangeFull};

use crate::error::ViewError;

/// One dimension of a view: how many positions it has and how far apart
/// consecutive positions sit in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Axis {
    /// Number of positions along the axis.
    pub len: usize,
    /// Buffer distance between consecutive positions. May be negative or
    /// zero (broadcast).
    pub stride: isize,
}

impl Axis {
    /// A length-1 axis. Its stride is never used.
    pub const UNIT: Axis = Axis { len: 1, stride: 0 };

    /// Create an axis descriptor.
    pub fn new(len: usize, stride: isize) -> Self {
        Self { len, stride }
    }

    /// Buffer offsets (relative to the view offset) of the first and last
    /// positions, lowest first. `None` for an empty axis.
    ///
    /// Extents beyond `isize` saturate, which still lands them outside
    /// every buffer.
    pub(crate) fn extent(&self) -> Option<(isize, isize)> {
        let last = self.len.checked_sub(1)?;
        let span = step_offset(last, self.stride);
        Some((span.min(0), span.max(0)))
    }

    /// Fix the axis at `index`, leaving it with length 1. Returns the
    /// offset shift.
    pub(crate) fn pin(&mut self, axis: usize, index: usize) -> Result<isize, ViewError> {
        if index >= self.len {
            return Err(ViewError::IndexOutOfBounds {
                axis,
                index,
                len: self.len,
            });
        }
        self.len = 1;
        Ok(step_offset(index, self.stride))
    }

    /// Restrict the axis to `span`, composing strides. Returns the offset
    /// shift.
    pub(crate) fn restrict(&mut self, axis: usize, span: Span) -> Result<isize, ViewError> {
        if span.step == 0 {
            return Err(ViewError::ZeroStep { axis });
        }
        let out_of_bounds = ViewError::SpanOutOfBounds {
            axis,
            start: span.start,
            len: span.len,
            step: span.step,
            available: self.len,
        };
        let fits = match span.len {
            0 => span.start <= self.len,
            n => (n - 1)
                .checked_mul(span.step)
                .and_then(|reach| reach.checked_add(span.start))
                .is_some_and(|last| last < self.len),
        };
        if !fits {
            return Err(out_of_bounds);
        }
        let shift = step_offset(span.start, self.stride);
        self.stride = step_offset(span.step, self.stride);
        self.len = span.len;
        Ok(shift)
    }
}

/// Buffer distance covered by `position` steps of `stride`, saturating at
/// the `isize` bounds.
///
/// Only views that address no cells can saturate; for any other view the
/// result lies within the buffer.
pub(crate) fn step_offset(position: usize, stride: isize) -> isize {
    isize::try_from(position)
        .unwrap_or(isize::MAX)
        .saturating_mul(stride)
}

/// A sub-range of an axis, in that axis' own coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// First position.
    pub start: usize,
    /// Number of positions.
    pub len: usize,
    /// Distance between consecutive positions (at least 1).
    pub step: usize,
}

impl Span {
    /// `len` consecutive positions starting at `start`.
    pub fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            step: 1,
        }
    }

    /// The same span taking every `step`-th position.
    pub fn step_by(self, step: usize) -> Self {
        Self { step, ..self }
    }

    /// The span that selects `inner` out of the positions selected by
    /// `self`, expressed against the axis `self` slices.
    pub fn compose(self, inner: Span) -> Self {
        Self {
            start: self.start + inner.start * self.step,
            len: inner.len,
            step: self.step * inner.step,
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

/// How one axis is sliced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Index {
    /// A single position; the axis stays, with length 1.
    At(usize),
    /// A sub-range.
    Span(Span),
    /// The whole axis, unchanged.
    All,
}

impl From<usize> for Index {
    fn from(position: usize) -> Self {
        Self::At(position)
    }
}

impl From<Span> for Index {
    fn from(span: Span) -> Self {
        Self::Span(span)
    }
}

impl From<Range<usize>> for Index {
    fn from(range: Range<usize>) -> Self {
        Self::Span(range.into())
    }
}

impl From<RangeFull> for Index {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_handles_negative_stride() {
        assert_eq!(Axis::new(4, 3).extent(), Some((0, 9)));
        assert_eq!(Axis::new(4, -2).extent(), Some((-6, 0)));
        assert_eq!(Axis::new(0, 5).extent(), None);
    }

    #[test]
    fn extent_saturates_instead_of_overflowing() {
        assert_eq!(Axis::new(3, isize::MAX).extent(), Some((0, isize::MAX)));
        assert_eq!(Axis::new(3, isize::MIN).extent(), Some((isize::MIN, 0)));
        assert_eq!(Axis::new(usize::MAX, 0).extent(), Some((0, 0)));
        assert_eq!(Axis::new(usize::MAX, 1).extent(), Some((0, isize::MAX)));
    }

    #[test]
    fn pin_shifts_by_stride() {
        let mut axis = Axis::new(5, 7);
        assert_eq!(axis.pin(0, 3), Ok(21));
        assert_eq!(axis, Axis::new(1, 7));
    }

    #[test]
    fn pin_past_end_fails() {
        let mut axis = Axis::new(5, 1);
        assert!(matches!(
            axis.pin(1, 5),
            Err(ViewError::IndexOutOfBounds { axis: 1, index: 5, len: 5 })
        ));
    }

    #[test]
    fn restrict_composes_stride() {
        let mut axis = Axis::new(10, 3);
        let shift = axis.restrict(0, Span::new(2, 4).step_by(2)).unwrap();
        assert_eq!(shift, 6);
        assert_eq!(axis, Axis::new(4, 6));
    }

    #[test]
    fn restrict_checks_extent_not_just_len() {
        // start 1 + 3 steps of 3 reaches position 10 on a length-10 axis.
        let mut axis = Axis::new(10, 1);
        assert!(axis.restrict(0, Span::new(1, 4).step_by(3)).is_err());
        assert!(axis.restrict(0, Span::new(0, 4).step_by(3)).is_ok());
    }

    #[test]
    fn restrict_allows_empty_span_at_end() {
        let mut axis = Axis::new(3, 1);
        assert_eq!(axis.restrict(0, Span::new(3, 0)), Ok(3));
        assert_eq!(axis.len, 0);
        let mut axis = Axis::new(3, 1);
        assert!(axis.restrict(0, Span::new(4, 0)).is_err());
    }

    #[test]
    fn restrict_rejects_zero_step() {
        let mut axis = Axis::new(3, 1);
        assert_eq!(
            axis.restrict(2, Span::new(0, 1).step_by(0)),
            Err(ViewError::ZeroStep { axis: 2 })
        );
    }

    #[test]
    fn span_from_range() {
        assert_eq!(Span::from(2..5), Span::new(2, 3));
        assert_eq!(Index::from(..), Index::All);
        assert_eq!(Index::from(4), Index::At(4));
    }

    #[test]
    fn compose_matches_sequential_restrict() {
        let outer = Span::new(1, 5).step_by(2);
        let inner = Span::new(1, 2).step_by(2);
        let mut twice = Axis::new(12, 1);
        let s1 = twice.restrict(0, outer).unwrap();
        let s2 = twice.restrict(0, inner).unwrap();
        let mut once = Axis::new(12, 1);
        let s = once.restrict(0, outer.compose(inner)).unwrap();
        assert_eq!(twice, once);
        assert_eq!(s1 + s2, s);
    }
}
