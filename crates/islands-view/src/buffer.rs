//! Shared cell storage behind every view.
//!
//! [`Buffer`] is a reference-counted slice of `Cell<bool>`. Cloning it
//! clones the handle, not the cells, so any number of views may alias the
//! same storage and the storage lives as long as the last view holding it.
//! Interior mutability lets a scalar view write its cell through a shared
//! handle; the handle is deliberately `!Send`, matching the single-threaded
//! solvers.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Reference-counted boolean storage shared by views.
#[derive(Clone)]
pub struct Buffer(Rc<[Cell<bool>]>);

impl Buffer {
    /// Build a buffer holding `values` in order.
    pub fn from_bools<I: IntoIterator<Item = bool>>(values: I) -> Self {
        Self(values.into_iter().map(Cell::new).collect())
    }

    /// Build a buffer of `len` cells, all `false`.
    pub fn falses(len: usize) -> Self {
        Self::from_bools(std::iter::repeat_n(false, len))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer holds no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `a` and `b` are handles to the same storage.
    pub fn same(a: &Buffer, b: &Buffer) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live handles (buffers and views) to this storage.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Copy the current cell values out.
    pub fn to_vec(&self) -> Vec<bool> {
        self.0.iter().map(Cell::get).collect()
    }

    /// The cell at flat position `index`. Views only call this with
    /// offsets validated at construction.
    pub(crate) fn cell(&self, index: usize) -> &Cell<bool> {
        &self.0[index]
    }
}

impl From<Vec<bool>> for Buffer {
    fn from(values: Vec<bool>) -> Self {
        Self::from_bools(values)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("handles", &self.handles())
            .finish()
    }
}
