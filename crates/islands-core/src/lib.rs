//! Core types for the island counters.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! island identifier, the [`Label`] carried by boundary cells, and the
//! [`DisjointForest`] that records which identifiers name the same island.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod forest;
pub mod id;

pub use error::ForestError;
pub use forest::DisjointForest;
pub use id::{IslandId, Label};
