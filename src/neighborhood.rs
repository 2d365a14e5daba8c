//! Four-directional anchor moves.

use crate::grid::{Anchor, GridModel};

/// Valid anchors one cell away from `anchor`.
///
/// Candidates are probed in a fixed order: down, up, right, left. Any
/// candidate whose window would leave the grid, or whose row or column
/// would go below zero, is dropped. Hill climbing breaks ties by this
/// order, so it must not change.
///
/// # Examples
///
/// ```
/// use u_terrain::grid::{Anchor, GridModel};
/// use u_terrain::neighborhood::neighbors;
///
/// let grid = GridModel::from_rows(vec![vec![0.0; 7]; 7]).unwrap();
/// let n = neighbors(&grid, Anchor::new(1, 1));
/// assert_eq!(
///     n,
///     vec![Anchor::new(2, 1), Anchor::new(0, 1), Anchor::new(1, 2), Anchor::new(1, 0)]
/// );
/// ```
pub fn neighbors(grid: &GridModel, anchor: Anchor) -> Vec<Anchor> {
    let Anchor { row, col } = anchor;
    let candidates = [
        Some(Anchor::new(row + 1, col)),
        row.checked_sub(1).map(|r| Anchor::new(r, col)),
        Some(Anchor::new(row, col + 1)),
        col.checked_sub(1).map(|c| Anchor::new(row, c)),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|&a| grid.is_valid_anchor(a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flat(rows: usize, cols: usize) -> GridModel {
        GridModel::from_rows(vec![vec![0.0; cols]; rows]).unwrap()
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let grid = flat(8, 8);
        assert_eq!(
            neighbors(&grid, Anchor::new(0, 0)),
            vec![Anchor::new(1, 0), Anchor::new(0, 1)]
        );
        assert_eq!(
            neighbors(&grid, Anchor::new(3, 3)),
            vec![Anchor::new(2, 3), Anchor::new(3, 2)]
        );
    }

    #[test]
    fn test_single_anchor_grid_has_none() {
        let grid = flat(5, 5);
        assert!(neighbors(&grid, Anchor::new(0, 0)).is_empty());
    }

    #[test]
    fn test_thin_strip() {
        // Only one valid row of anchors.
        let grid = flat(5, 9);
        assert_eq!(
            neighbors(&grid, Anchor::new(0, 2)),
            vec![Anchor::new(0, 3), Anchor::new(0, 1)]
        );
    }

    proptest! {
        #[test]
        fn prop_neighbors_are_valid_and_adjacent(
            rows in 5usize..12,
            cols in 5usize..12,
            seed_row in 0usize..100,
            seed_col in 0usize..100,
        ) {
            let grid = flat(rows, cols);
            let (max_row, max_col) = grid.anchor_bounds();
            let anchor = Anchor::new(seed_row % (max_row + 1), seed_col % (max_col + 1));
            let n = neighbors(&grid, anchor);
            prop_assert!(n.len() <= 4);
            for a in n {
                prop_assert!(grid.is_valid_anchor(a));
                let dist = a.row.abs_diff(anchor.row) + a.col.abs_diff(anchor.col);
                prop_assert_eq!(dist, 1);
            }
        }
    }
}
