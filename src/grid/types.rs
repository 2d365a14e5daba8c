//! Anchor and window types.

use std::fmt;

/// Side length of the square search window.
pub const WINDOW_SIZE: usize = 5;

/// Top-left corner of a window, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

impl Anchor {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Anchor {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 5x5 block of samples covered by an anchor.
///
/// Displays as five lines of five space-separated samples.
///
/// # Examples
///
/// ```
/// use u_terrain::grid::GridModel;
/// use u_terrain::grid::Anchor;
/// use u_terrain::objective::window_values;
///
/// let grid = GridModel::from_rows(vec![vec![1.0; 5]; 5]).unwrap();
/// let window = window_values(&grid, Anchor::new(0, 0)).unwrap();
/// assert_eq!(window.to_string().lines().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub anchor: Anchor,
    pub values: [[f64; WINDOW_SIZE]; WINDOW_SIZE],
}

impl Window {
    /// Smallest sample in the window.
    pub fn min(&self) -> f64 {
        self.samples().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample in the window.
    pub fn max(&self) -> f64 {
        self.samples().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Row-major iterator over the 25 samples.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flat_map(|row| row.iter().copied())
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.values {
            let mut first = true;
            for value in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_from_tuple() {
        assert_eq!(Anchor::from((3, 4)), Anchor::new(3, 4));
        assert_eq!(Anchor::new(3, 4).to_string(), "(3, 4)");
    }

    #[test]
    fn test_window_display() {
        let mut values = [[0.0; WINDOW_SIZE]; WINDOW_SIZE];
        values[1][2] = 7.5;
        let window = Window {
            anchor: Anchor::new(0, 0),
            values,
        };
        let text = window.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "0 0 0 0 0");
        assert_eq!(lines[1], "0 0 7.5 0 0");
    }

    #[test]
    fn test_window_min_max() {
        let mut values = [[1.0; WINDOW_SIZE]; WINDOW_SIZE];
        values[4][4] = -2.0;
        values[0][3] = 6.0;
        let window = Window {
            anchor: Anchor::new(2, 2),
            values,
        };
        assert_eq!(window.min(), -2.0);
        assert_eq!(window.max(), 6.0);
        assert_eq!(window.samples().count(), 25);
    }
}
