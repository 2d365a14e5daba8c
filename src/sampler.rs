//! Uniform random start anchors by rejection sampling.

use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{Anchor, GridModel, WINDOW_SIZE};

/// Draws uniformly random valid anchors.
///
/// Each attempt picks a row in `[0, rows)` and a column in `[0, cols)` and
/// keeps it if the window fits. Attempts are capped so an impossible
/// request fails instead of spinning.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_terrain::grid::GridModel;
/// use u_terrain::sampler::PositionSampler;
///
/// let grid = GridModel::from_rows(vec![vec![0.0; 10]; 10]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let anchor = PositionSampler::default().sample(&grid, &mut rng).unwrap();
/// assert!(grid.is_valid_anchor(anchor));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSampler {
    /// Draws allowed before giving up with [`Error::NoValidRegion`].
    pub max_attempts: usize,
}

impl Default for PositionSampler {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

impl PositionSampler {
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Draws a valid anchor for `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidRegion`] if `max_attempts` draws all miss.
    pub fn sample<R: Rng>(&self, grid: &GridModel, rng: &mut R) -> Result<Anchor> {
        self.sample_in(grid.rows(), grid.cols(), rng)
    }

    /// Draws a valid anchor for a `rows` x `cols` shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidRegion`] if `max_attempts` draws all miss,
    /// which is immediate for shapes smaller than the window.
    pub fn sample_in<R: Rng>(&self, rows: usize, cols: usize, rng: &mut R) -> Result<Anchor> {
        if rows > 0 && cols > 0 {
            for _ in 0..self.max_attempts {
                let row = rng.random_range(0..rows);
                let col = rng.random_range(0..cols);
                if row + WINDOW_SIZE <= rows && col + WINDOW_SIZE <= cols {
                    return Ok(Anchor::new(row, col));
                }
            }
        }

        tracing::warn!(rows, cols, attempts = self.max_attempts, "no valid anchor sampled");
        Err(Error::NoValidRegion {
            rows,
            cols,
            attempts: self.max_attempts,
        })
    }
}
