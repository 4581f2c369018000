//! Seeded random grids.
//!
//! Uses a ChaCha8 RNG so the same seed yields the same grids on every
//! platform.

use islands_view::{Buffer, View, ViewError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Parameters for [`GridGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridGenConfig {
    /// Smallest side length produced by [`GridGenerator::next_grid`].
    pub min_side: usize,
    /// Largest side length produced by [`GridGenerator::next_grid`].
    pub max_side: usize,
    /// Probability that a cell is set. Must lie in `[0, 1]`.
    pub density: f64,
    pub seed: u64,
}

impl Default for GridGenConfig {
    /// Density sits just under the site-percolation threshold, where
    /// islands are numerous and irregular.
    fn default() -> Self {
        Self {
            min_side: 1,
            max_side: 32,
            density: 0.499,
            seed: 0,
        }
    }
}

/// Produces random row-major grids with independently set cells.
#[derive(Clone, Debug)]
pub struct GridGenerator {
    config: GridGenConfig,
    rng: ChaCha8Rng,
}

impl GridGenerator {
    /// A generator seeded from `config.seed`.
    ///
    /// # Panics
    ///
    /// Panics if `density` is outside `[0, 1]` or `min_side > max_side`.
    pub fn new(config: GridGenConfig) -> Self {
        assert!(
            (0.0..=1.0).contains(&config.density),
            "density {} outside [0, 1]",
            config.density
        );
        assert!(
            config.min_side <= config.max_side,
            "min_side {} exceeds max_side {}",
            config.min_side,
            config.max_side
        );
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GridGenConfig {
            seed,
            ..GridGenConfig::default()
        })
    }

    pub fn config(&self) -> &GridGenConfig {
        &self.config
    }

    /// A `height × width` grid over a fresh buffer.
    pub fn grid(&mut self, height: usize, width: usize) -> Result<View<2>, ViewError> {
        let cells = height
            .checked_mul(width)
            .ok_or(ViewError::ShapeOverflow { height, width })?;
        let density = self.config.density;
        let rng = &mut self.rng;
        let buffer = Buffer::from_bools((0..cells).map(|_| rng.random_bool(density)));
        View::row_major(buffer, height, width)
    }

    /// A grid with both sides drawn from `min_side..=max_side`.
    pub fn next_grid(&mut self) -> Result<View<2>, ViewError> {
        let sides = self.config.min_side..=self.config.max_side;
        let height = self.rng.random_range(sides.clone());
        let width = self.rng.random_range(sides);
        self.grid(height, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn same_seed_same_grids() {
        let mut a = GridGenerator::with_seed(7);
        let mut b = GridGenerator::with_seed(7);
        for _ in 0..5 {
            let (ga, gb) = (a.next_grid().unwrap(), b.next_grid().unwrap());
            assert_eq!(render(&ga), render(&gb));
        }
    }

    #[test]
    fn sides_respect_bounds() {
        let mut generator = GridGenerator::new(GridGenConfig {
            min_side: 3,
            max_side: 5,
            ..GridGenConfig::default()
        });
        for _ in 0..50 {
            let g = generator.next_grid().unwrap();
            assert!((3..=5).contains(&g.height()));
            assert!((3..=5).contains(&g.width()));
        }
    }

    #[test]
    fn extreme_densities() {
        let mut full = GridGenerator::new(GridGenConfig {
            density: 1.0,
            ..GridGenConfig::default()
        });
        assert_eq!(full.grid(4, 6).unwrap().count_true(), 24);
        let mut blank = GridGenerator::new(GridGenConfig {
            density: 0.0,
            ..GridGenConfig::default()
        });
        assert_eq!(blank.grid(4, 6).unwrap().count_true(), 0);
    }

    #[test]
    fn overflowing_shape_is_an_error() {
        let mut generator = GridGenerator::with_seed(1);
        assert_eq!(
            generator.grid(usize::MAX, 2).unwrap_err(),
            ViewError::ShapeOverflow {
                height: usize::MAX,
                width: 2
            }
        );
    }

    #[test]
    #[should_panic(expected = "density")]
    fn rejects_bad_density() {
        GridGenerator::new(GridGenConfig {
            density: 1.5,
            ..GridGenConfig::default()
        });
    }
}
