//! Steepest-ascent hill climbing.
//!
//! Deterministic: from the current anchor, evaluate every neighbor and move
//! to the best one that strictly improves the variation. Stop when no
//! neighbor improves. The result is a local maximum with respect to the
//! four single-cell moves.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*,
//!   ch. 4 "Local Search Algorithms"

mod runner;

pub(crate) use runner::climb;
pub use runner::{HcResult, HillClimber};
