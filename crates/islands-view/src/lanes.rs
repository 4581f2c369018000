//! Iteration over sub-views and cell values.

use std::iter::FusedIterator;

use crate::axis::{step_offset, Axis};
use crate::view::View;

/// The sub-views of a view taken one position at a time along an axis,
/// e.g. the rows or the columns of a grid.
///
/// Each item is the template view moved by the axis stride; no cells are
/// copied. A clone taken before advancing replays the same sequence.
#[derive(Clone, Debug)]
pub struct Lanes<const M: usize> {
    template: View<M>,
    stride: isize,
    front: usize,
    back: usize,
}

impl<const M: usize> Lanes<M> {
    pub(crate) fn new(template: View<M>, along: Axis) -> Self {
        Self {
            template,
            stride: along.stride,
            front: 0,
            back: along.len,
        }
    }

    fn lane(&self, position: usize) -> View<M> {
        self.template.shifted(step_offset(position, self.stride))
    }
}

impl<const M: usize> Iterator for Lanes<M> {
    type Item = View<M>;

    fn next(&mut self) -> Option<View<M>> {
        if self.front == self.back {
            return None;
        }
        let lane = self.lane(self.front);
        self.front += 1;
        Some(lane)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<View<M>> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<const M: usize> DoubleEndedIterator for Lanes<M> {
    fn next_back(&mut self) -> Option<View<M>> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.lane(self.back))
    }
}

impl<const M: usize> ExactSizeIterator for Lanes<M> {}

impl<const M: usize> FusedIterator for Lanes<M> {}

/// Cell values of a view in row-major order (last axis fastest).
#[derive(Clone, Debug)]
pub struct Values<'a, const N: usize> {
    view: &'a View<N>,
    coords: [usize; N],
    cursor: isize,
    remaining: usize,
}

impl<'a, const N: usize> Values<'a, N> {
    pub(crate) fn new(view: &'a View<N>) -> Self {
        Self {
            view,
            coords: [0; N],
            cursor: view.offset(),
            remaining: view.cell_count(),
        }
    }
}

impl<const N: usize> Iterator for Values<'_, N> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.view.buffer().cell(self.cursor as usize).get();
        // Odometer step: bump the last axis, carry into earlier ones. The
        // cursor only ever visits cells of the view or its offset.
        for (coord, axis) in self.coords.iter_mut().zip(self.view.axes()).rev() {
            if *coord + 1 < axis.len {
                *coord += 1;
                self.cursor += axis.stride;
                break;
            }
            self.cursor -= step_offset(*coord, axis.stride);
            *coord = 0;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Values<'_, N> {}

impl<const N: usize> FusedIterator for Values<'_, N> {}
