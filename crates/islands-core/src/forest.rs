//! Disjoint-set forest over [`IslandId`]s.
//!
//! Each issued id stores a parent id. An id that is its own parent is a
//! *root*: a real, distinct island. Unions always point both roots at the
//! lesser of the two, so the canonical representative of every set is its
//! minimum id no matter in which order unions were performed. The
//! divide-and-conquer solver relies on this to renumber boundary labels
//! reproducibly.
//!
//! There is no path compression: [`trace_root`](DisjointForest::trace_root)
//! takes `&self` and never mutates. Callers that look the same id up
//! repeatedly cache the result themselves.

use crate::error::ForestError;
use crate::id::IslandId;

/// A growable union-find structure mapping island ids to their root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisjointForest {
    parents: Vec<IslandId>,
}

impl DisjointForest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forest holding `count` self-rooted ids, `0..count`.
    pub fn with_roots(count: usize) -> Self {
        let mut forest = Self {
            parents: Vec::with_capacity(count),
        };
        for _ in 0..count {
            forest.add_new();
        }
        forest
    }

    /// Number of ids issued so far.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether no id has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Issue a new self-rooted id.
    ///
    /// Ids are 32-bit; a forest never holds more ids than its grid has
    /// cells, and the solvers reject grids above `u32::MAX` cells before
    /// building one.
    pub fn add_new(&mut self) -> IslandId {
        debug_assert!(self.parents.len() < u32::MAX as usize);
        let id = IslandId(self.parents.len() as u32);
        self.parents.push(id);
        id
    }

    /// Follow parent pointers from `id` until a root is reached.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::IdOutOfRange`] if `id` was never issued.
    pub fn trace_root(&self, id: IslandId) -> Result<IslandId, ForestError> {
        let mut current = *self.parents.get(id.index()).ok_or(ForestError::IdOutOfRange {
            id,
            len: self.parents.len(),
        })?;
        let mut prev = id;
        while current != prev {
            prev = current;
            current = self.parents[current.index()];
        }
        Ok(current)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Both roots are redirected to the lesser root. Identical raw ids
    /// return immediately without tracing.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::IdOutOfRange`] if either id was never issued,
    /// except when `a == b`: that call returns `Ok(())` without checking
    /// the id at all.
    pub fn coalesce(&mut self, a: IslandId, b: IslandId) -> Result<(), ForestError> {
        // Tracing is the expensive part; equal raw ids need no union.
        if a == b {
            return Ok(());
        }
        let root_a = self.trace_root(a)?;
        let root_b = self.trace_root(b)?;
        let min = root_a.min(root_b);
        self.parents[root_a.index()] = min;
        self.parents[root_b.index()] = min;
        Ok(())
    }

    /// Number of roots, i.e. distinct islands known to the forest.
    pub fn count_roots(&self) -> usize {
        self.parents
            .iter()
            .enumerate()
            .filter(|&(index, parent)| parent.index() == index)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_forest_is_empty() {
        let forest = DisjointForest::new();
        assert!(forest.is_empty());
        assert_eq!(forest.count_roots(), 0);
    }

    #[test]
    fn add_new_issues_sequential_roots() {
        let mut forest = DisjointForest::new();
        assert_eq!(forest.add_new(), IslandId(0));
        assert_eq!(forest.add_new(), IslandId(1));
        assert_eq!(forest.add_new(), IslandId(2));
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.count_roots(), 3);
    }

    #[test]
    fn with_roots_presizes() {
        let forest = DisjointForest::with_roots(5);
        assert_eq!(forest.len(), 5);
        assert_eq!(forest.count_roots(), 5);
        for i in 0..5 {
            assert_eq!(forest.trace_root(IslandId(i)).unwrap(), IslandId(i));
        }
    }

    #[test]
    fn coalesce_picks_minimum_root() {
        let mut forest = DisjointForest::with_roots(4);
        forest.coalesce(IslandId(3), IslandId(1)).unwrap();
        assert_eq!(forest.trace_root(IslandId(3)).unwrap(), IslandId(1));
        assert_eq!(forest.trace_root(IslandId(1)).unwrap(), IslandId(1));
        assert_eq!(forest.count_roots(), 3);
    }

    #[test]
    fn coalesce_chains_resolve_to_global_minimum() {
        let mut forest = DisjointForest::with_roots(6);
        forest.coalesce(IslandId(4), IslandId(5)).unwrap();
        forest.coalesce(IslandId(2), IslandId(3)).unwrap();
        forest.coalesce(IslandId(5), IslandId(3)).unwrap();
        for i in 2..6 {
            assert_eq!(forest.trace_root(IslandId(i)).unwrap(), IslandId(2));
        }
        assert_eq!(forest.count_roots(), 3);
    }

    #[test]
    fn coalesce_same_set_is_noop() {
        let mut forest = DisjointForest::with_roots(3);
        forest.coalesce(IslandId(0), IslandId(2)).unwrap();
        let before = forest.clone();
        forest.coalesce(IslandId(2), IslandId(0)).unwrap();
        forest.coalesce(IslandId(1), IslandId(1)).unwrap();
        assert_eq!(forest, before);
    }

    #[test]
    fn trace_root_rejects_unissued_id() {
        let forest = DisjointForest::with_roots(2);
        assert_eq!(
            forest.trace_root(IslandId(2)),
            Err(ForestError::IdOutOfRange {
                id: IslandId(2),
                len: 2
            })
        );
    }

    #[test]
    fn coalesce_rejects_unissued_id() {
        let mut forest = DisjointForest::with_roots(2);
        assert!(forest.coalesce(IslandId(0), IslandId(7)).is_err());
        // The failed union must not have touched the valid operand.
        assert_eq!(forest.count_roots(), 2);
    }

    #[test]
    fn coalesce_equal_ids_skips_the_bounds_check() {
        let mut forest = DisjointForest::new();
        assert_eq!(forest.coalesce(IslandId(9), IslandId(9)), Ok(()));
        assert!(forest.is_empty());
        assert!(forest.coalesce(IslandId(9), IslandId(8)).is_err());
    }
}
