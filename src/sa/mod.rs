//! Simulated Annealing (SA).
//!
//! A stochastic variant of hill climbing over window anchors. Each step
//! proposes one random neighbor; improvements are always taken and other
//! moves are taken with a probability that shrinks as the temperature
//! cools. Once the temperature reaches its floor, a steepest-ascent climb
//! finishes the run.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::{AcceptanceRule, CoolingSchedule, SaConfig};
pub use runner::{SaResult, SimulatedAnnealer};
