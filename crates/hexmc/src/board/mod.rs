//! Board data model: players, square grids, the synthetic border, sampling.
//!
//! Conventions (fixed system-wide)
//! - `Player::One` connects the top and bottom sides, `Player::Two` the left
//!   and right sides.
//! - Coordinates are `(row, col)`, row-major, `[0, n-1]²`.
//! - Boards are always fully filled; there is no "empty" cell value.

pub mod rand;
mod types;

pub use types::{BorderedBoard, Board, Coord, Player, Vertex};
