//! Adaptive critical-cell search.
//!
//! Purpose
//! - Drive repeated Monte-Carlo trials of the boundary walk: sample a random
//!   board, overlay the cells fixed so far, solve the board and its
//!   180°-rotation, and intersect the two winning chains. Cells that sit on
//!   the winning boundary in both orientations are "critical" for the trial.
//! - After each batch of trials, fix the most critical free cell to a fair
//!   random value and start the next round. The experiment ends when no cell
//!   is statistically critical (or the round budget runs out).
//!
//! One round must fully complete before the next begins (the overlay depends
//! on the previous round's selection). Within a round every trial owns its
//! replay-token RNG stream and an integer-sum reduction, so trials are
//! embarrassingly parallel if that is ever needed; the reference driver is
//! single-threaded.

mod run;
mod types;

pub use run::run;
pub use types::{
    CountGrid, FixedCells, RoundContext, SearchError, SearchOutcome, SearchParams, Termination,
};
