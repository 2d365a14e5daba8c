//! Immutable elevation grid.

use super::types::{Anchor, WINDOW_SIZE};
use crate::error::{Error, GridError, Result};

/// A rectangular, read-only matrix of elevation samples.
///
/// Samples are stored row-major. Construction guarantees at least
/// [`WINDOW_SIZE`] rows and columns, so at least one valid anchor exists.
///
/// # Examples
///
/// ```
/// use u_terrain::grid::{Anchor, GridModel};
///
/// let grid = GridModel::from_rows(vec![vec![0.0; 6]; 7]).unwrap();
/// assert_eq!(grid.dimensions(), (7, 6));
/// assert!(grid.is_valid_anchor(Anchor::new(2, 1)));
/// assert!(!grid.is_valid_anchor(Anchor::new(3, 1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridModel {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl GridModel {
    /// Builds a grid from a matrix of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for no rows, [`GridError::Ragged`] when a
    /// row length differs from the first row, [`GridError::TooSmall`] when
    /// either dimension is below 5, [`GridError::NonFinite`] for NaN or
    /// infinite samples, and [`GridError::RangeOverflow`] when the spread
    /// between the smallest and largest sample is not a finite `f64`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> std::result::Result<Self, GridError> {
        let cols = match rows.first() {
            Some(first) => first.len(),
            None => return Err(GridError::Empty),
        };

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        if rows.len() < WINDOW_SIZE || cols < WINDOW_SIZE {
            return Err(GridError::TooSmall {
                rows: rows.len(),
                cols,
            });
        }

        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(GridError::NonFinite { row: r, col: c });
            }
            values.extend(row);
        }

        // Every window's range is bounded by the grid's range.
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !(max - min).is_finite() {
            return Err(GridError::RangeOverflow { min, max });
        }

        Ok(Self {
            rows: n_rows,
            cols,
            values,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Bounds-checked sample lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(row, col)` lies outside the grid.
    pub fn sample(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.at(row, col))
    }

    /// Whether the 5x5 window at `anchor` lies entirely inside the grid.
    pub fn is_valid_anchor(&self, anchor: Anchor) -> bool {
        let (max_row, max_col) = self.anchor_bounds();
        anchor.row <= max_row && anchor.col <= max_col
    }

    /// Largest valid anchor row and column.
    pub fn anchor_bounds(&self) -> (usize, usize) {
        (self.rows - WINDOW_SIZE, self.cols - WINDOW_SIZE)
    }

    /// Number of distinct valid anchors.
    pub fn anchor_count(&self) -> usize {
        let (max_row, max_col) = self.anchor_bounds();
        (max_row + 1) * (max_col + 1)
    }

    /// Returns an [`Error::InvalidAnchor`] unless `anchor` is valid.
    pub(crate) fn check_anchor(&self, anchor: Anchor) -> Result<()> {
        if self.is_valid_anchor(anchor) {
            Ok(())
        } else {
            Err(Error::InvalidAnchor {
                row: anchor.row,
                col: anchor.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row slice of the window's columns, for an anchor already known valid.
    #[inline]
    pub(crate) fn window_row(&self, row: usize, col: usize) -> &[f64] {
        let start = row * self.cols + col;
        &self.values[start..start + WINDOW_SIZE]
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for GridModel {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<f64>>) -> std::result::Result<Self, GridError> {
        Self::from_rows(rows)
    }
}
