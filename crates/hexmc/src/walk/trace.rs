//! The boundary walk itself.

use crate::board::{Board, BorderedBoard, Coord, Player, Vertex};

use super::types::{Chain, WalkError, Window};

/// Determine the winner of a fully-filled board.
///
/// Returns the winner and the chain of board cells lying along the traced
/// boundary. The walk makes O(n) dual-edge steps: at every step the bordered
/// value ahead (`v4`) is compared against the two cells flanking the current
/// edge (`v3`, then `v2`) to pick the turn, until `v4` leaves the bordered
/// range. Exit through column `-1` (bottom left) means `One` won and the
/// recorded `v3` cells form the chain; exit through row `0` (top right)
/// means `Two` won with the `v2` cells.
pub fn solve(board: &Board) -> Result<(Player, Chain), WalkError> {
    let bordered = BorderedBoard::new(board);
    let n = board.side() as i64;

    let mut v2_chain = Chain::new();
    let mut v3_chain = Chain::new();
    let mut w = Window::start();

    while in_bordered_range(w.v4, n) {
        record_interior(&mut v2_chain, w.v2, n);
        record_interior(&mut v3_chain, w.v3, n);

        let ahead = bordered.get(w.v4);
        w = if ahead == bordered.get(w.v3) {
            w.turn_left()
        } else if ahead == bordered.get(w.v2) {
            w.turn_right()
        } else {
            // The edge invariant (v2 and v3 differ) rules this out on any
            // validly bordered board.
            return Err(WalkError::NoTurn { at: w.v4 });
        };
    }

    if w.v4.y == -1 {
        Ok((Player::One, v3_chain))
    } else if w.v4.x == 0 {
        Ok((Player::Two, v2_chain))
    } else {
        Err(WalkError::BadExit { at: w.v4 })
    }
}

/// The walk continues while `v4` stays on the bordered grid (row may poke
/// one step past the top seam).
#[inline]
fn in_bordered_range(v: Vertex, n: i64) -> bool {
    (-1..=n + 1).contains(&v.x) && (0..=n + 1).contains(&v.y)
}

/// Record a vertex into a chain if it is an interior board cell, mapped from
/// bordered to board coordinates. Border cells are skipped.
#[inline]
fn record_interior(chain: &mut Chain, v: Vertex, n: i64) {
    if (1..=n).contains(&v.x) && (1..=n).contains(&v.y) {
        let coord: Coord = ((v.x - 1) as usize, (v.y - 1) as usize);
        chain.insert(coord);
    }
}
