//! Hill climbing execution loop.

use rand::Rng;

use crate::error::Result;
use crate::grid::{Anchor, GridModel};
use crate::neighborhood::neighbors;
use crate::objective::window_variation;
use crate::search::{LocalSearch, RunResult};

/// Result of a hill-climbing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult {
    /// Terminal anchor, a local maximum.
    pub anchor: Anchor,

    /// Variation at `anchor`.
    pub score: f64,

    /// Number of accepted moves.
    pub moves: usize,

    /// Start score followed by the score after each move. Strictly increasing.
    pub score_history: Vec<f64>,
}

impl From<&HcResult> for RunResult {
    fn from(result: &HcResult) -> Self {
        RunResult {
            score: result.score,
            anchor: result.anchor,
        }
    }
}

/// Steepest-ascent hill climber.
///
/// # Examples
///
/// ```
/// use u_terrain::grid::{Anchor, GridModel};
/// use u_terrain::hc::HillClimber;
///
/// let mut rows = vec![vec![0.0; 12]; 12];
/// rows[10][10] = 4.0;
/// let grid = GridModel::from_rows(rows).unwrap();
///
/// let result = HillClimber.run(&grid, Anchor::new(0, 0)).unwrap();
/// // (0, 0) is flat and so are its neighbors, so it is already a local optimum.
/// assert_eq!(result.score, 0.0);
///
/// // One step down from (5, 6) brings the spike into the window.
/// let result = HillClimber.run(&grid, Anchor::new(5, 6)).unwrap();
/// assert_eq!(result.anchor, Anchor::new(6, 6));
/// assert_eq!(result.score, 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimber;

impl HillClimber {
    /// Climbs from `start` until no neighbor strictly improves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAnchor`](crate::Error::InvalidAnchor) if
    /// `start` is not a valid anchor of `grid`.
    pub fn run(&self, grid: &GridModel, start: Anchor) -> Result<HcResult> {
        grid.check_anchor(start)?;
        Ok(climb(grid, start))
    }
}

impl LocalSearch for HillClimber {
    fn name(&self) -> &str {
        "hill climbing"
    }

    fn search<R: Rng>(&self, grid: &GridModel, start: Anchor, _rng: &mut R) -> Result<RunResult> {
        self.run(grid, start).map(|r| RunResult::from(&r))
    }
}

/// Climbs from an anchor already known to be valid.
///
/// Each move strictly raises the score and there are finitely many
/// anchors, so the loop ends.
pub(crate) fn climb(grid: &GridModel, start: Anchor) -> HcResult {
    let mut current = start;
    let mut score = window_variation(grid, current);
    let mut score_history = vec![score];

    loop {
        let mut best: Option<(Anchor, f64)> = None;
        for candidate in neighbors(grid, current) {
            let s = window_variation(grid, candidate);
            // Strict on both sides: ties keep the earlier neighbor.
            if s > score && best.is_none_or(|(_, b)| s > b) {
                best = Some((candidate, s));
            }
        }

        match best {
            Some((next, s)) => {
                tracing::trace!(row = next.row, col = next.col, score = s, "hill climb move");
                current = next;
                score = s;
                score_history.push(s);
            }
            None => break,
        }
    }

    HcResult {
        anchor: current,
        score,
        moves: score_history.len() - 1,
        score_history,
    }
}
