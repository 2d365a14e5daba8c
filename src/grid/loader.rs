//! Text loader for elevation grids.
//!
//! The format is line-oriented: each non-blank line is one grid row of
//! whitespace-separated numbers. A load either yields a complete, validated
//! [`GridModel`] or an error; partial grids are never returned.

use std::path::Path;

use thiserror::Error;

use super::model::GridModel;
use crate::error::GridError;

/// Errors raised while loading a grid from text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),

    /// A token is not a number. `line` and `column` are 1-based; `column`
    /// counts tokens, not characters.
    #[error("line {line}, value {column}: `{token}` is not a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parses whitespace-delimited rows of numbers into a grid.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] on the first non-numeric token and
/// [`LoadError::Grid`] if the rows do not form a valid grid.
///
/// # Examples
///
/// ```
/// use u_terrain::grid::loader::parse_grid;
///
/// let text = "1 2 3 4 5\n2 3 4 5 6\n3 4 5 6 7\n4 5 6 7 8\n5 6 7 8 9\n";
/// let grid = parse_grid(text).unwrap();
/// assert_eq!(grid.dimensions(), (5, 5));
/// ```
pub fn parse_grid(text: &str) -> Result<GridModel, LoadError> {
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col_idx, token)| {
                token.parse::<f64>().map_err(|_| LoadError::Parse {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, LoadError>>()?;
        rows.push(row);
    }

    let grid = GridModel::from_rows(rows)?;
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        "parsed elevation grid"
    );
    Ok(grid)
}

/// Reads and parses a grid file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_grid`].
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<GridModel, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading elevation grid");
    parse_grid(&text)
}
