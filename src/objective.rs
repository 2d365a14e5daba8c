//! The variation objective.
//!
//! The variation of a window is the difference between its largest and
//! smallest sample. It is always non-negative, zero exactly when the
//! window is flat, and unchanged by adding a constant to every sample.

use crate::error::Result;
use crate::grid::{Anchor, GridModel, Window, WINDOW_SIZE};

/// Variation (max - min) of the window anchored at `anchor`.
///
/// # Errors
///
/// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) if the
/// window does not fit inside the grid.
///
/// # Examples
///
/// ```
/// use u_terrain::grid::{Anchor, GridModel};
/// use u_terrain::objective::variation;
///
/// let mut rows = vec![vec![0.0; 6]; 6];
/// rows[2][3] = 9.0;
/// let grid = GridModel::from_rows(rows).unwrap();
/// assert_eq!(variation(&grid, Anchor::new(0, 0)).unwrap(), 9.0);
/// ```
pub fn variation(grid: &GridModel, anchor: Anchor) -> Result<f64> {
    grid.check_anchor(anchor)?;
    Ok(window_variation(grid, anchor))
}

/// Variation for an anchor the caller has already validated.
#[inline]
pub(crate) fn window_variation(grid: &GridModel, anchor: Anchor) -> f64 {
    debug_assert!(grid.is_valid_anchor(anchor));
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for r in anchor.row..anchor.row + WINDOW_SIZE {
        for &v in grid.window_row(r, anchor.col) {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
    }
    max - min
}

/// Copies out the 5x5 block of samples at `anchor`.
///
/// # Errors
///
/// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) if the
/// window does not fit inside the grid.
pub fn window_values(grid: &GridModel, anchor: Anchor) -> Result<Window> {
    grid.check_anchor(anchor)?;
    let mut values = [[0.0; WINDOW_SIZE]; WINDOW_SIZE];
    for (i, row) in values.iter_mut().enumerate() {
        row.copy_from_slice(grid.window_row(anchor.row + i, anchor.col));
    }
    Ok(Window { anchor, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use proptest::prelude::*;

    fn peak_grid() -> GridModel {
        let mut rows = vec![vec![0.0; 6]; 6];
        rows[2][3] = 9.0;
        GridModel::from_rows(rows).unwrap()
    }

    #[test]
    fn test_peak_scenario() {
        let grid = peak_grid();
        assert_eq!(variation(&grid, Anchor::new(0, 0)).unwrap(), 9.0);
        assert_eq!(variation(&grid, Anchor::new(1, 1)).unwrap(), 9.0);
        assert_eq!(variation(&grid, Anchor::new(0, 1)).unwrap(), 9.0);
    }

    #[test]
    fn test_uniform_grid_is_flat() {
        let grid = GridModel::from_rows(vec![vec![5.0; 7]; 7]).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(variation(&grid, Anchor::new(r, c)).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_invalid_anchor_rejected() {
        let grid = peak_grid();
        assert!(matches!(
            variation(&grid, Anchor::new(2, 0)),
            Err(Error::InvalidAnchor { row: 2, col: 0, .. })
        ));
        assert!(window_values(&grid, Anchor::new(0, 2)).is_err());
    }

    #[test]
    fn test_window_values_match_samples() {
        let rows: Vec<Vec<f64>> = (0..7)
            .map(|r| (0..8).map(|c| (r * 10 + c) as f64).collect())
            .collect();
        let grid = GridModel::from_rows(rows).unwrap();
        let window = window_values(&grid, Anchor::new(1, 2)).unwrap();
        assert_eq!(window.values[0][0], 12.0);
        assert_eq!(window.values[4][4], 56.0);
        assert_eq!(window.max() - window.min(), 44.0);
        assert_eq!(
            variation(&grid, Anchor::new(1, 2)).unwrap(),
            window.max() - window.min()
        );
    }

    fn grid_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (5usize..9, 5usize..9).prop_flat_map(|(r, c)| {
            prop::collection::vec(prop::collection::vec(-1000.0f64..1000.0, c), r)
        })
    }

    proptest! {
        #[test]
        fn prop_variation_non_negative(rows in grid_strategy()) {
            let grid = GridModel::from_rows(rows).unwrap();
            let (max_row, max_col) = grid.anchor_bounds();
            for r in 0..=max_row {
                for c in 0..=max_col {
                    let anchor = Anchor::new(r, c);
                    let v = variation(&grid, anchor).unwrap();
                    prop_assert!(v >= 0.0);
                    let window = window_values(&grid, anchor).unwrap();
                    let flat = window.samples().all(|s| s == window.values[0][0]);
                    prop_assert_eq!(v == 0.0, flat);
                }
            }
        }

        #[test]
        fn prop_variation_translation_invariant(
            rows in grid_strategy(),
            shift in -500.0f64..500.0,
        ) {
            let shifted: Vec<Vec<f64>> = rows
                .iter()
                .map(|row| row.iter().map(|v| v + shift).collect())
                .collect();
            let grid = GridModel::from_rows(rows).unwrap();
            let moved = GridModel::from_rows(shifted).unwrap();
            let (max_row, max_col) = grid.anchor_bounds();
            for r in 0..=max_row {
                for c in 0..=max_col {
                    let anchor = Anchor::new(r, c);
                    let a = variation(&grid, anchor).unwrap();
                    let b = variation(&moved, anchor).unwrap();
                    prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
                }
            }
        }
    }
}
