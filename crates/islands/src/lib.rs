//! Islands: count 4-connected regions of set cells in boolean grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the islands sub-crates. Three independent algorithms are provided so
//! each can check the others.
//!
//! # Quick start
//!
//! ```rust
//! use islands::prelude::*;
//!
//! let grid = View::from_rows(&[
//!     [true, true, false, false],
//!     [false, true, false, true],
//!     [false, false, false, true],
//! ]).unwrap();
//!
//! assert_eq!(islands::count_islands(&grid, Algorithm::RowScan).unwrap(), 2);
//!
//! // Every algorithm, cross-checked.
//! let check = SolverConfig::default().run(&grid).unwrap();
//! assert_eq!(check.agreed().unwrap(), 2);
//!
//! // Views are cheap: the transpose shares the same buffer.
//! let tall = grid.transposed();
//! assert_eq!(islands::count_islands(&tall, Algorithm::DivideAndConquer).unwrap(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `islands-core` | Island ids and the disjoint-set forest |
//! | [`view`] | `islands-view` | Shared buffers and strided N-dimensional views |
//! | [`solve`] | `islands-solve` | The three counters, config and cross-checking |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Island ids and the disjoint-set forest (`islands-core`).
pub use islands_core as types;

/// Shared buffers and strided views (`islands-view`).
///
/// [`view::View`] is the grid type every counter accepts.
pub use islands_view as view;

/// Island counters (`islands-solve`).
///
/// [`solve::row_scan`], [`solve::divide`] and [`solve::flood_fill`] each
/// expose a `count` function; [`solve::SolverConfig`] runs several at once.
pub use islands_solve as solve;

use islands_solve::{Algorithm, SolveError};
use islands_view::View;

/// Count the islands in `grid` with `algorithm`.
///
/// # Errors
///
/// Propagates the chosen solver's error.
pub fn count_islands(grid: &View<2>, algorithm: Algorithm) -> Result<usize, SolveError> {
    algorithm.count(grid)
}

/// Common imports for typical usage.
///
/// ```rust
/// use islands::prelude::*;
/// ```
pub mod prelude {
    // Ids
    pub use islands_core::{IslandId, Label};

    // Views
    pub use islands_view::{Buffer, Index, Span, View, ViewError, HEIGHT, WIDTH};

    // Solvers
    pub use islands_solve::{Algorithm, CrossCheck, SolveError, SolverConfig};
}
