//! Elevation grid, anchors and windows.
//!
//! A [`GridModel`] is built once from validated rows and then shared
//! read-only by every search. An [`Anchor`] names the top-left corner of
//! a 5x5 [`Window`]; it is valid when the whole window fits in the grid.

pub mod loader;
mod model;
mod types;

pub use model::GridModel;
pub use types::{Anchor, Window, WINDOW_SIZE};
