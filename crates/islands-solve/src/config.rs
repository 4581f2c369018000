//! Solver selection and cross-checking.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use islands_view::View;
use log::{debug, warn};

use crate::error::SolveError;
use crate::{divide, flood_fill, row_scan};

/// One of the island-counting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Single top-to-bottom pass with a disjoint-set forest.
    RowScan,
    /// Recursive halving with seam merges.
    DivideAndConquer,
    /// Flood fill over a padded copy.
    FloodFill,
}

impl Algorithm {
    /// Every algorithm, row scan first.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::RowScan,
        Algorithm::DivideAndConquer,
        Algorithm::FloodFill,
    ];

    /// Stable name used by [`Display`](fmt::Display) and [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::RowScan => "row-scan",
            Self::DivideAndConquer => "divide-and-conquer",
            Self::FloodFill => "flood-fill",
        }
    }

    /// Count the islands in `grid` with this algorithm.
    ///
    /// # Errors
    ///
    /// Propagates the chosen solver's error.
    pub fn count(self, grid: &View<2>) -> Result<usize, SolveError> {
        match self {
            Self::RowScan => row_scan::count(grid),
            Self::DivideAndConquer => divide::count(grid),
            Self::FloodFill => flood_fill::count(grid),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Errors from validating a [`SolverConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No algorithm was selected.
    NoAlgorithms,
    /// The same algorithm was listed twice.
    DuplicateAlgorithm {
        /// The repeated algorithm.
        algorithm: Algorithm,
    },
    /// A name did not match any algorithm.
    UnknownAlgorithm {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlgorithms => write!(f, "no algorithms selected"),
            Self::DuplicateAlgorithm { algorithm } => {
                write!(f, "algorithm {algorithm} selected more than once")
            }
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
        }
    }
}

impl Error for ConfigError {}

/// Which solvers to run, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Algorithms to run. Must be non-empty and free of repeats.
    pub algorithms: Vec<Algorithm>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SolverConfig {
    /// A config running only `algorithm`.
    pub fn single(algorithm: Algorithm) -> Self {
        Self {
            algorithms: vec![algorithm],
        }
    }

    /// Check the selection is non-empty and has no repeats.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(algorithm) {
                return Err(ConfigError::DuplicateAlgorithm {
                    algorithm: *algorithm,
                });
            }
        }
        Ok(())
    }

    /// Run every selected algorithm on `grid`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or the first solver error.
    pub fn run(&self, grid: &View<2>) -> Result<CrossCheck, SolveError> {
        self.validate()?;
        let mut counts = IndexMap::with_capacity(self.algorithms.len());
        for &algorithm in &self.algorithms {
            counts.insert(algorithm, algorithm.count(grid)?);
        }
        debug!(
            "cross-check: {}x{} grid, {} solvers",
            grid.height(),
            grid.width(),
            counts.len()
        );
        Ok(CrossCheck { counts })
    }
}

/// Island counts from several algorithms on the same grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossCheck {
    counts: IndexMap<Algorithm, usize>,
}

impl CrossCheck {
    /// Counts keyed by algorithm, in run order.
    pub fn counts(&self) -> &IndexMap<Algorithm, usize> {
        &self.counts
    }

    /// The count `algorithm` produced, if it ran.
    pub fn count(&self, algorithm: Algorithm) -> Option<usize> {
        self.counts.get(&algorithm).copied()
    }

    /// The common count when every algorithm agrees.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Disagreement`] listing every count otherwise.
    pub fn agreed(&self) -> Result<usize, SolveError> {
        let mut values = self.counts.values().copied();
        let first = values.next().ok_or(ConfigError::NoAlgorithms)?;
        if values.all(|v| v == first) {
            return Ok(first);
        }
        let counts: Vec<(Algorithm, usize)> =
            self.counts.iter().map(|(&a, &n)| (a, n)).collect();
        warn!("solvers disagree: {counts:?}");
        Err(SolveError::Disagreement { counts })
    }
}
