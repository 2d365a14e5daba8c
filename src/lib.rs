//! Local search for the highest-variation window in an elevation grid.
//!
//! Given a 2D grid of real-valued samples, find the 5x5 window whose
//! variation (largest sample minus smallest sample) is as large as
//! possible. Four strategies share the same objective and move set:
//!
//! - **Hill climbing** ([`hc`]): deterministic steepest ascent over the
//!   four single-cell shifts of the window's top-left anchor.
//! - **Simulated annealing** ([`sa`]): random neighbor proposals with a
//!   geometric cooling schedule, finished by hill climbing once cold.
//! - **Random restart** ([`restart`]) around either of the above, reporting
//!   the best and the average result over many random starts.
//!
//! # Architecture
//!
//! A [`GridModel`](grid::GridModel) is built once from validated rows and
//! passed by reference to every search. All randomness flows through an
//! injected [`rand::Rng`] or a seed in the search config, so runs are
//! reproducible. Text loading ([`grid::loader`]) and window rendering
//! ([`grid::Window`]'s `Display`) are provided for callers; the searches
//! never touch them.
//!
//! # Examples
//!
//! ```
//! use u_terrain::grid::GridModel;
//! use u_terrain::hc::HillClimber;
//! use u_terrain::objective::window_values;
//! use u_terrain::restart::{RestartConfig, RestartRunner};
//!
//! let rows: Vec<Vec<f64>> = (0..12)
//!     .map(|r| (0..12).map(|c| ((r * 5 + c * 3) % 7) as f64).collect())
//!     .collect();
//! let grid = GridModel::from_rows(rows)?;
//!
//! let config = RestartConfig::default().with_seed(42);
//! let result = RestartRunner::run(&grid, &HillClimber, &config)?;
//! if let Some(best) = result.best {
//!     let window = window_values(&grid, best.anchor)?;
//!     assert_eq!(window.max() - window.min(), result.best_score);
//! }
//! # Ok::<(), u_terrain::Error>(())
//! ```

pub mod error;
pub mod grid;
pub mod hc;
pub mod neighborhood;
pub mod objective;
pub mod restart;
pub mod sa;
pub mod sampler;
pub mod search;

pub use error::{Error, GridError, Result};
