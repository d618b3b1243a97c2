//! Hex boundary-walk solver and adaptive critical-cell experiments.
//!
//! Two components, composed sequentially:
//! - `walk`: determine the winner of a fully-filled Hex board with a single
//!   O(n) boundary walk over the bordered lattice (Gale's algorithm). No
//!   flood fill or union-find; a filled board always has exactly one winner.
//! - `search`: the adaptive Monte-Carlo driver. Sample random fillings,
//!   solve each board and its 180°-rotation, intersect the two winning
//!   chains, and round by round fix the statistically most critical cell
//!   until no cell is critical.
//!
//! `board` holds the shared data model (players, boards, reproducible
//! Bernoulli sampling via replay tokens).

pub mod board;
pub mod search;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::board::rand::{draw_board, draw_player, ReplayToken};
    pub use crate::board::{Board, Coord, Player};
    pub use crate::search::{
        run, CountGrid, FixedCells, SearchError, SearchOutcome, SearchParams, Termination,
    };
    pub use crate::walk::{solve, Chain, WalkError};
}
