//! Error types.

use thiserror::Error;

/// Reasons a sample matrix cannot become a [`GridModel`](crate::grid::GridModel).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The matrix has no rows.
    #[error("grid has no rows")]
    Empty,

    /// A row does not have the same length as the first row.
    #[error("row {row} has {found} samples, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Fewer than five rows or columns, so no window fits.
    #[error("grid is {rows}x{cols}, a 5x5 window needs at least 5 rows and 5 columns")]
    TooSmall { rows: usize, cols: usize },

    /// A sample is NaN or infinite.
    #[error("sample at ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    /// `max - min` over the whole grid overflows `f64`, so window
    /// variations could be infinite.
    #[error("sample range from {min} to {max} overflows")]
    RangeOverflow { min: f64, max: f64 },
}

/// Errors raised by the search core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The sample matrix was rejected at construction.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    /// Rejection sampling gave up without finding a valid anchor.
    #[error("no valid 5x5 region in a {rows}x{cols} grid after {attempts} attempts")]
    NoValidRegion {
        rows: usize,
        cols: usize,
        attempts: usize,
    },

    /// Direct sample access outside the grid.
    #[error("sample ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The anchor's window does not fit inside the grid.
    #[error("anchor ({row}, {col}) does not fit a 5x5 window in the {rows}x{cols} grid")]
    InvalidAnchor {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A search config failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
