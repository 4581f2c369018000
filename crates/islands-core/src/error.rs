//! Error types for the disjoint-set forest.

use std::error::Error;
use std::fmt;

use crate::IslandId;

/// Errors from [`DisjointForest`](crate::DisjointForest) lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForestError {
    /// An id that was never issued by this forest.
    IdOutOfRange {
        /// The offending id.
        id: IslandId,
        /// Number of ids the forest has issued.
        len: usize,
    },
}

impl fmt::Display for ForestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdOutOfRange { id, len } => {
                write!(f, "island id {id} out of range: forest holds {len} ids")
            }
        }
    }
}

impl Error for ForestError {}
