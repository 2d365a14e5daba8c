//! Common interface of the local searches and one-call entry points.

use rand::Rng;

use crate::error::Result;
use crate::grid::{Anchor, GridModel};
use crate::hc::{HcResult, HillClimber};
use crate::sa::{SaConfig, SaResult, SimulatedAnnealer};

/// Terminal state of one local-search run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Variation of the window at `anchor`.
    pub score: f64,
    pub anchor: Anchor,
}

/// A local search that starts at an anchor and ends at a local optimum.
///
/// Implemented by [`HillClimber`] and [`SimulatedAnnealer`]; the restart
/// driver is generic over it.
pub trait LocalSearch: Send + Sync {
    /// Short human-readable name, used in log events.
    fn name(&self) -> &str;

    /// Runs one search from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) if
    /// `start` is not a valid anchor of `grid`.
    fn search<R: Rng>(&self, grid: &GridModel, start: Anchor, rng: &mut R) -> Result<RunResult>;
}

/// Steepest-ascent hill climbing from `start`.
///
/// # Errors
///
/// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) for an
/// invalid start.
pub fn hill_climb(grid: &GridModel, start: Anchor) -> Result<HcResult> {
    HillClimber.run(grid, start)
}

/// Simulated annealing from `start` with the default schedule.
///
/// # Errors
///
/// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) for an
/// invalid start.
pub fn simulated_anneal<R: Rng>(grid: &GridModel, start: Anchor, rng: &mut R) -> Result<SaResult> {
    SimulatedAnnealer::new(SaConfig::default())?.run(grid, start, rng)
}
