//! SA configuration, cooling schedule and acceptance rule.

use crate::error::{Error, Result};

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.999 }
    }
}

/// How a non-improving move is accepted.
///
/// Both rules compute `p = exp((f_new - f_current) / T)`, which lies in
/// `(0, 1]` for a non-improving move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptanceRule {
    /// Standard Metropolis criterion: accept iff `u < p` with `u` uniform
    /// in `[0, 1)`. Acceptance of worse moves falls off as `T` drops.
    #[default]
    Metropolis,

    /// Draws `d` from `{0, 1}` and accepts iff `d < p`.
    ///
    /// Since `p <= 1`, this accepts any non-improving move with
    /// probability one half at every temperature (unless `p` underflows
    /// to zero). Kept to reproduce legacy results; it does not anneal.
    CoinFlip,
}

/// Configuration for simulated annealing.
///
/// Defaults: start at `T = 2.0`, multiply by `0.999` per step, stop once
/// `T <= 0.1`, then finish with hill climbing. That is 2995 steps.
///
/// # Examples
///
/// ```
/// use u_terrain::sa::{AcceptanceRule, CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(5.0)
///     .with_min_temperature(0.01)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
///     .with_acceptance(AcceptanceRule::Metropolis);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature.
    pub initial_temperature: f64,

    /// Annealing stops once the temperature is at or below this value.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    pub acceptance: AcceptanceRule,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 2.0,
            min_temperature: 0.1,
            cooling: CoolingSchedule::default(),
            acceptance: AcceptanceRule::default(),
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_acceptance(mut self, acceptance: AcceptanceRule) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for non-positive or non-finite
    /// temperatures, `min_temperature >= initial_temperature`, or a
    /// cooling factor outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(Error::InvalidConfig(
                "initial_temperature must be positive".into(),
            ));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(Error::InvalidConfig("min_temperature must be positive".into()));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(Error::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Temperature after `step` cooling steps.
    pub fn temperature_at(&self, step: usize) -> f64 {
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                self.initial_temperature * alpha.powf(step as f64)
            }
        }
    }

    /// Number of annealing steps before the temperature reaches
    /// `min_temperature`: the smallest `n >= 1` with
    /// `temperature_at(n) <= min_temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if [`SaConfig::validate`] fails;
    /// such schedules may never reach `min_temperature`.
    pub fn cooling_steps(&self) -> Result<usize> {
        self.validate()?;
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                let ratio = self.min_temperature / self.initial_temperature;
                let estimate = (ratio.ln() / alpha.ln()).ceil().max(1.0) as usize;
                // Correct the floating-point estimate against temperature_at.
                let mut n = estimate;
                while self.temperature_at(n) > self.min_temperature {
                    n += 1;
                }
                while n > 1 && self.temperature_at(n - 1) <= self.min_temperature {
                    n -= 1;
                }
                Ok(n)
            }
        }
    }
}
