//! Random-restart search.
//!
//! Repeats a [`LocalSearch`](crate::search::LocalSearch) from independent,
//! uniformly random start anchors and reports the best and average result.
//! Works with both [`HillClimber`](crate::hc::HillClimber) and
//! [`SimulatedAnnealer`](crate::sa::SimulatedAnnealer).

mod config;
mod runner;

pub use config::RestartConfig;
pub use runner::{RestartResult, RestartRunner};
