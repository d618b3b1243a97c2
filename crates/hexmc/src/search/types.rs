//! Experiment parameters, accumulators, and outcome types.
//!
//! The per-round accumulators live in an explicit `RoundContext` that the
//! driver threads through rounds, keeping trials independently testable;
//! there is no ambient module-level state.

use std::fmt;

use crate::board::{Board, Coord, Player};
use crate::walk::WalkError;

/// Experiment parameters.
///
/// `side` must be odd (the board needs a well-defined center) and ≥ 1;
/// `trials_per_round` must be > 0. `max_rounds` defaults to `side²`, the
/// largest number of cells that can ever be fixed, and is clamped to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub side: usize,
    pub trials_per_round: usize,
    pub max_rounds: Option<usize>,
}

impl SearchParams {
    /// Parameters for a board of side `2h + 1` (enforced odd by shape).
    pub fn from_half_size(half_size: usize, trials_per_round: usize) -> Self {
        Self {
            side: 2 * half_size + 1,
            trials_per_round,
            max_rounds: None,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.side == 0 {
            return Err(SearchError::invalid("side must be >= 1"));
        }
        if self.side % 2 == 0 {
            return Err(SearchError::invalid(
                "side must be odd so the board has a center",
            ));
        }
        if self.trials_per_round == 0 {
            return Err(SearchError::invalid("trials_per_round must be > 0"));
        }
        Ok(())
    }
}

/// Configuration failures, rejected before any trial runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    InvalidParams { reason: String },
}

impl SearchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid search params: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Per-cell critical counts for one round. Reset at the start of every
/// round; never accumulates across rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountGrid {
    side: usize,
    counts: Vec<u32>,
}

impl CountGrid {
    pub fn zeros(side: usize) -> Self {
        Self {
            side,
            counts: vec![0; side * side],
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, (r, c): Coord) -> u32 {
        self.counts[r * self.side + c]
    }

    #[inline]
    pub fn incr(&mut self, (r, c): Coord) {
        self.counts[r * self.side + c] += 1;
    }

    /// Cell with the maximum count, or `None` if the grid is all zero.
    /// Ties break to the lexicographically smallest `(row, col)` (row-major
    /// scan keeps only strict improvements), so selection is deterministic.
    pub fn argmax(&self) -> Option<(Coord, u32)> {
        let mut best: Option<(Coord, u32)> = None;
        for r in 0..self.side {
            for c in 0..self.side {
                let v = self.get((r, c));
                if v > 0 && best.map_or(true, |(_, bv)| v > bv) {
                    best = Some(((r, c), v));
                }
            }
        }
        best
    }

    /// Largest value strictly below `max` over the flattened grid, 0 when
    /// every entry equals `max`. Values tied with the maximum are excluded,
    /// they are not a "second" value.
    pub fn second_distinct_max(&self, max: u32) -> u32 {
        self.counts
            .iter()
            .copied()
            .filter(|&v| v < max)
            .max()
            .unwrap_or(0)
    }
}

/// Ordered record of `(coordinate, value)` fixes, growing by one per round.
/// The only state carried between rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedCells {
    entries: Vec<(Coord, Player)>,
}

impl FixedCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Coord, Player)> {
        self.entries.iter()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.iter().any(|&(c, _)| c == coord)
    }

    /// Append a fix. Coordinates are pairwise distinct by construction (a
    /// fixed cell is held at count zero and can never win the argmax again).
    pub fn push(&mut self, coord: Coord, value: Player) {
        debug_assert!(!self.contains(coord));
        self.entries.push((coord, value));
    }

    /// Overwrite every fixed coordinate in `board` with its recorded value.
    pub fn overlay(&self, board: &mut Board) {
        for &((r, c), value) in &self.entries {
            board.set(r, c, value);
        }
    }
}

/// Accumulators threaded through the rounds of one experiment.
#[derive(Clone, Debug)]
pub struct RoundContext {
    pub side: usize,
    pub trials_per_round: usize,
    pub fixed: FixedCells,
    pub win1_history: Vec<f64>,
    pub max_val_history: Vec<f64>,
    pub margin_history: Vec<f64>,
}

impl RoundContext {
    pub fn new(side: usize, trials_per_round: usize) -> Self {
        Self {
            side,
            trials_per_round,
            fixed: FixedCells::new(),
            win1_history: Vec::new(),
            max_val_history: Vec::new(),
            margin_history: Vec::new(),
        }
    }

    pub fn into_outcome(self, termination: Termination) -> SearchOutcome {
        SearchOutcome {
            side: self.side,
            trials_per_round: self.trials_per_round,
            fixed: self.fixed,
            win1_history: self.win1_history,
            max_val_history: self.max_val_history,
            margin_history: self.margin_history,
            termination,
        }
    }
}

/// How the experiment ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A full round produced an all-zero count grid: no further cell is
    /// statistically pivotal.
    Converged,
    /// The round budget ran out before convergence.
    RoundBudget,
    /// A fatal walk failure; the histories stop at the reported trial. This
    /// is a construction-level defect, never a recoverable condition.
    Aborted {
        round: usize,
        trial: usize,
        error: WalkError,
    },
}

/// Result of one experiment run.
///
/// The histories have one entry per completed fixing round; the terminal
/// (all-zero) round contributes nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub side: usize,
    pub trials_per_round: usize,
    pub fixed: FixedCells,
    pub win1_history: Vec<f64>,
    pub max_val_history: Vec<f64>,
    pub margin_history: Vec<f64>,
    pub termination: Termination,
}

impl SearchOutcome {
    /// Number of rounds that fixed a cell.
    pub fn rounds_run(&self) -> usize {
        self.win1_history.len()
    }

    /// Whether the run ended normally (converged or exhausted its budget)
    /// rather than aborting mid-round.
    pub fn is_complete(&self) -> bool {
        !matches!(self.termination, Termination::Aborted { .. })
    }

    /// Row-major `side × side` grid of fixed values as digits, 0 where the
    /// cell was never fixed. This is the deterministic partial pattern the
    /// experiment built up.
    pub fn pattern(&self) -> Vec<u8> {
        let mut grid = vec![0u8; self.side * self.side];
        for &((r, c), value) in self.fixed.iter() {
            grid[r * self.side + c] = value.as_digit();
        }
        grid
    }
}
