//! SA execution loop.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::config::{AcceptanceRule, SaConfig};
use crate::error::Result;
use crate::grid::{Anchor, GridModel};
use crate::hc::{self, HcResult};
use crate::neighborhood::neighbors;
use crate::objective::window_variation;
use crate::search::{LocalSearch, RunResult};

/// Result of a simulated annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Final anchor, after the closing hill climb.
    pub anchor: Anchor,

    /// Variation at `anchor`.
    pub score: f64,

    /// Number of annealing steps (neighbor evaluations before the climb).
    pub iterations: usize,

    /// Temperature when annealing stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// The closing hill climb, started where annealing stopped.
    pub climb: HcResult,
}

impl From<&SaResult> for RunResult {
    fn from(result: &SaResult) -> Self {
        RunResult {
            score: result.score,
            anchor: result.anchor,
        }
    }
}

/// Simulated annealing over window anchors.
///
/// Each step proposes one uniformly random neighbor, always takes
/// improvements and takes other moves per the configured
/// [`AcceptanceRule`]. Once cold, the search hands over to hill climbing.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_terrain::grid::{Anchor, GridModel};
/// use u_terrain::sa::{SaConfig, SimulatedAnnealer};
///
/// let rows: Vec<Vec<f64>> = (0..20)
///     .map(|r| (0..20).map(|c| ((r * 7 + c * 3) % 11) as f64).collect())
///     .collect();
/// let grid = GridModel::from_rows(rows).unwrap();
/// let annealer = SimulatedAnnealer::new(SaConfig::default()).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let result = annealer.run(&grid, Anchor::new(0, 0), &mut rng).unwrap();
/// assert!(result.final_temperature <= 0.1);
/// assert!(grid.is_valid_anchor(result.anchor));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealer {
    config: SaConfig,
}

impl SimulatedAnnealer {
    /// Creates an annealer from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// [`SaConfig::validate`] fails.
    pub fn new(config: SaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Anneals from `start`, then hill-climbs from where it cooled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) if
    /// `start` is not a valid anchor of `grid`.
    #[tracing::instrument(level = "debug", name = "simulated annealing", skip(self, grid, rng))]
    pub fn run<R: Rng>(&self, grid: &GridModel, start: Anchor, rng: &mut R) -> Result<SaResult> {
        grid.check_anchor(start)?;
        let config = &self.config;

        let mut current = start;
        let mut current_score = window_variation(grid, current);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        // With a single valid anchor there is nothing to propose.
        let (iterations, final_temperature) = if grid.anchor_count() == 1 {
            tracing::debug!("no neighbors, skipping annealing");
            (0, config.initial_temperature)
        } else {
            let steps = config.cooling_steps()?;
            for step in 0..steps {
                let temperature = config.temperature_at(step);
                let options = neighbors(grid, current);
                let Some(&candidate) = options.choose(rng) else {
                    break;
                };
                let candidate_score = window_variation(grid, candidate);

                let accept = if candidate_score > current_score {
                    improving_moves += 1;
                    true
                } else {
                    let probability = ((candidate_score - current_score) / temperature).exp();
                    accepts(config.acceptance, probability, rng)
                };

                if accept {
                    current = candidate;
                    current_score = candidate_score;
                    accepted_moves += 1;
                }
            }
            (steps, config.temperature_at(steps))
        };

        tracing::debug!(
            iterations,
            accepted_moves,
            improving_moves,
            score = current_score,
            "annealing cooled, handing over to hill climbing"
        );

        let climb = hc::climb(grid, current);
        Ok(SaResult {
            anchor: climb.anchor,
            score: climb.score,
            iterations,
            final_temperature,
            accepted_moves,
            improving_moves,
            climb,
        })
    }
}

impl LocalSearch for SimulatedAnnealer {
    fn name(&self) -> &str {
        "simulated annealing"
    }

    fn search<R: Rng>(&self, grid: &GridModel, start: Anchor, rng: &mut R) -> Result<RunResult> {
        self.run(grid, start, rng).map(|r| RunResult::from(&r))
    }
}

/// Decides whether a non-improving move is taken.
fn accepts<R: Rng>(rule: AcceptanceRule, probability: f64, rng: &mut R) -> bool {
    match rule {
        AcceptanceRule::Metropolis => rng.random::<f64>() < probability,
        AcceptanceRule::CoinFlip => f64::from(rng.random_range(0u8..=1)) < probability,
    }
}
