//! Winner determination by boundary walk (Gale's algorithm).
//!
//! Purpose
//! - Given a fully-filled board, return the winner and the set of board
//!   cells along the traced winning boundary, in O(n) dual-edge steps.
//!
//! Why this design
//! - A filled Hex board always has exactly one player with a connecting
//!   chain (never a draw), so following the boundary between the two colors
//!   from a fixed corner must exit at one of exactly two corners. That
//!   topological guarantee is the whole algorithm; nothing here re-derives
//!   connectivity by search, and nothing may.
//!
//! Code cross-refs: `board::{Board, BorderedBoard}`, `search::run` (the
//! only internal caller besides tests).

mod trace;
mod types;

pub use trace::solve;
pub use types::{Chain, WalkError};

#[cfg(test)]
mod tests;
