//! Island counting over strided boolean grids.
//!
//! Three independent algorithms compute the number of 4-connected islands
//! of `true` cells in a [`View<2>`]:
//!
//! - [`row_scan`]: one top-to-bottom pass with a disjoint-set forest.
//! - [`divide`]: split rows in half, solve each half, merge the halves
//!   through their shared seam.
//! - [`flood_fill`]: clear each island from a padded private copy.
//!
//! They share no state, so running them side by side
//! ([`SolverConfig::run`]) cross-validates each against the others.
//!
//! # Example
//!
//! ```
//! use islands_solve::{divide, flood_fill, row_scan};
//! use islands_view::View;
//!
//! let grid = View::from_rows(&[
//!     [true, false, true],
//!     [true, false, false],
//! ]).unwrap();
//! assert_eq!(row_scan::count(&grid).unwrap(), 2);
//! assert_eq!(divide::count(&grid).unwrap(), 2);
//! assert_eq!(flood_fill::count(&grid).unwrap(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod divide;
pub mod error;
pub mod flood_fill;
pub mod row_scan;

pub use config::{Algorithm, ConfigError, CrossCheck, SolverConfig};
pub use divide::PartialSolution;
pub use error::SolveError;

use islands_view::View;

/// Reject grids with more cells than 32-bit island ids can number.
pub(crate) fn ensure_id_space(grid: &View<2>) -> Result<(), SolveError> {
    let cells = grid.cell_count();
    if cells > u32::MAX as usize {
        return Err(SolveError::CellCountOverflow { cells });
    }
    Ok(())
}
