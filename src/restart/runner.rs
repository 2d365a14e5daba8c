//! Random-restart execution.
//!
//! # Algorithm
//!
//! 1. Draw one seed per trial from the master RNG
//! 2. For each trial, with its own RNG:
//!    a. Sample a random valid start anchor
//!    b. Run the local search from it
//! 3. Sum the trial scores; keep the first trial with the strictly
//!    highest score
//!
//! Per-trial seeds make the outcome independent of execution order, so
//! the `parallel` feature returns the same result as the sequential path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::RestartConfig;
use crate::error::Result;
use crate::grid::GridModel;
use crate::search::{LocalSearch, RunResult};

/// Aggregate outcome of a random-restart search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartResult {
    /// Highest trial score, or 0 if no trial scored above 0.
    pub best_score: f64,

    /// Mean of all trial scores.
    pub average_score: f64,

    /// First trial to reach `best_score`. `None` when every trial scored
    /// 0 (every sampled region was flat).
    pub best: Option<RunResult>,

    /// Score of each trial, in trial order.
    pub trial_scores: Vec<f64>,
}

/// Runs a local search repeatedly from random starts.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs `config.trials` searches seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) for
    /// zero trials and
    /// [`Error::NoValidRegion`](crate::Error::NoValidRegion) if a start
    /// cannot be sampled.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_terrain::grid::GridModel;
    /// use u_terrain::hc::HillClimber;
    /// use u_terrain::restart::{RestartConfig, RestartRunner};
    ///
    /// let mut rows = vec![vec![0.0; 8]; 8];
    /// rows[4][4] = 3.0;
    /// let grid = GridModel::from_rows(rows).unwrap();
    ///
    /// let config = RestartConfig::default().with_trials(10).with_seed(42);
    /// let result = RestartRunner::run(&grid, &HillClimber, &config).unwrap();
    /// assert_eq!(result.best_score, 3.0);
    /// assert!(result.best.is_some());
    /// ```
    pub fn run<A: LocalSearch>(
        grid: &GridModel,
        algorithm: &A,
        config: &RestartConfig,
    ) -> Result<RestartResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(grid, algorithm, config, &mut rng)
    }

    /// Runs `config.trials` searches, deriving trial seeds from `rng`.
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`RestartRunner::run`].
    #[tracing::instrument(level = "debug", name = "random restart", skip_all, fields(algorithm = algorithm.name(), trials = config.trials))]
    pub fn run_with_rng<A: LocalSearch, R: Rng>(
        grid: &GridModel,
        algorithm: &A,
        config: &RestartConfig,
        rng: &mut R,
    ) -> Result<RestartResult> {
        config.validate()?;

        let seeds: Vec<u64> = (0..config.trials).map(|_| rng.random()).collect();
        let outcomes = run_trials(grid, algorithm, config, &seeds)?;

        let mut best_score = 0.0;
        let mut best = None;
        let mut total = 0.0;
        for outcome in &outcomes {
            total += outcome.score;
            if outcome.score > best_score {
                best_score = outcome.score;
                best = Some(*outcome);
            }
        }

        let average_score = total / config.trials as f64;
        tracing::debug!(best_score, average_score, found = best.is_some(), "restarts finished");

        Ok(RestartResult {
            best_score,
            average_score,
            best,
            trial_scores: outcomes.iter().map(|o| o.score).collect(),
        })
    }
}

fn run_trial<A: LocalSearch>(
    grid: &GridModel,
    algorithm: &A,
    config: &RestartConfig,
    seed: u64,
) -> Result<RunResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = config.sampler.sample(grid, &mut rng)?;
    let outcome = algorithm.search(grid, start, &mut rng)?;
    tracing::trace!(
        start_row = start.row,
        start_col = start.col,
        score = outcome.score,
        "trial finished"
    );
    Ok(outcome)
}

#[cfg(not(feature = "parallel"))]
fn run_trials<A: LocalSearch>(
    grid: &GridModel,
    algorithm: &A,
    config: &RestartConfig,
    seeds: &[u64],
) -> Result<Vec<RunResult>> {
    seeds
        .iter()
        .map(|&seed| run_trial(grid, algorithm, config, seed))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_trials<A: LocalSearch>(
    grid: &GridModel,
    algorithm: &A,
    config: &RestartConfig,
    seeds: &[u64],
) -> Result<Vec<RunResult>> {
    use rayon::prelude::*;

    seeds
        .par_iter()
        .map(|&seed| run_trial(grid, algorithm, config, seed))
        .collect()
}
