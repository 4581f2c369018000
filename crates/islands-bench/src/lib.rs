//! Benchmark grids for the island counters.
//!
//! - [`SQUARE_SIDES`]: square grids of growing size.
//! - [`STRIP_SHAPES`]: strongly rectangular grids in both orientations,
//!   which stress the row-scan line buffers and the divide-and-conquer
//!   transposition respectively.
//! - [`bench_grid`]: deterministic random grid via seed.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use islands_test_utils::GridGenerator;
use islands_view::{View, ViewError};

/// Side lengths of the square benchmark grids.
pub const SQUARE_SIDES: [usize; 3] = [32, 128, 512];

/// `(height, width)` of the rectangular benchmark grids.
pub const STRIP_SHAPES: [(usize, usize); 2] = [(8, 8192), (8192, 8)];

/// Seed shared by every benchmark so runs compare like with like.
pub const BENCH_SEED: u64 = 42;

/// A random grid at the default near-percolation density.
pub fn bench_grid(height: usize, width: usize, seed: u64) -> Result<View<2>, ViewError> {
    GridGenerator::with_seed(seed).grid(height, width)
}
