//! Island identifiers and the [`Label`] type alias.

use std::fmt;

/// Identifies an island within a single solver invocation.
///
/// Ids are issued sequentially by [`DisjointForest::add_new`](crate::DisjointForest::add_new),
/// so `IslandId(n)` is the n-th id handed out. They carry no meaning
/// across invocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IslandId(pub u32);

impl IslandId {
    /// The id as a vector index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Shift this id by `bound`, moving it into a disjoint id range.
    pub fn offset(self, bound: u32) -> Self {
        Self(self.0 + bound)
    }
}

impl fmt::Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for IslandId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The label of one grid cell: the island it belongs to, or `None` for a
/// `false` (blank) cell.
pub type Label = Option<IslandId>;
