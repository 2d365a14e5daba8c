//! Random-restart configuration.

use crate::error::{Error, Result};
use crate::sampler::PositionSampler;

/// Configuration for random-restart search.
///
/// # Examples
///
/// ```
/// use u_terrain::restart::RestartConfig;
///
/// let config = RestartConfig::default().with_trials(20).with_seed(7);
/// assert_eq!(config.trials, 20);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Number of independent local-search runs.
    pub trials: usize,

    /// Random seed (None draws one from the thread RNG).
    pub seed: Option<u64>,

    /// Start-point sampler.
    pub sampler: PositionSampler,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            trials: 50,
            seed: None,
            sampler: PositionSampler::default(),
        }
    }
}

impl RestartConfig {
    /// Sets the number of trials.
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the start-point sampler.
    pub fn with_sampler(mut self, sampler: PositionSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when `trials` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be at least 1".into()));
        }
        Ok(())
    }
}
