use proptest::prelude::*;

use super::types::Window;
use super::*;
use crate::board::rand::{draw_board, ReplayToken};
use crate::board::{Board, Coord, Player, Vertex};

fn board_3x3(rows: [[u8; 3]; 3]) -> Board {
    Board::from_fn(3, |r, c| {
        if rows[r][c] == 1 {
            Player::One
        } else {
            Player::Two
        }
    })
}

#[test]
fn all_one_board_is_won_by_one() {
    for n in [1, 2, 3, 5, 9] {
        let (winner, chain) = solve(&Board::filled(n, Player::One)).unwrap();
        assert_eq!(winner, Player::One, "side {n}");
        assert!(!chain.is_empty());
    }
}

#[test]
fn all_two_board_is_won_by_two() {
    for n in [1, 2, 3, 5, 9] {
        let (winner, chain) = solve(&Board::filled(n, Player::Two)).unwrap();
        assert_eq!(winner, Player::Two, "side {n}");
        assert!(!chain.is_empty());
    }
}

#[test]
fn vertical_column_of_ones_wins_for_one() {
    let board = board_3x3([[1, 2, 2], [1, 2, 2], [1, 2, 2]]);
    let (winner, chain) = solve(&board).unwrap();
    assert_eq!(winner, Player::One);
    assert!(!chain.is_empty());
}

#[test]
fn horizontal_row_of_twos_wins_for_two() {
    let board = board_3x3([[1, 1, 1], [2, 2, 2], [1, 1, 1]]);
    let (winner, chain) = solve(&board).unwrap();
    assert_eq!(winner, Player::Two);
    assert!(chain.contains(&(1, 0)) && chain.contains(&(1, 1)) && chain.contains(&(1, 2)));
}

#[test]
fn window_turns_build_fresh_value_copies() {
    let w = Window::start();
    let right = w.turn_right();
    assert_eq!(right.v1, Vertex::new(0, 0));
    assert_eq!(right.v2, Vertex::new(1, 0));
    assert_eq!(right.v3, Vertex::new(0, 1));
    assert_eq!(right.v4, Vertex::new(1, 1));
    // The source window is untouched by the turn.
    assert_eq!(w, Window::start());

    let left = w.turn_left();
    assert_eq!(left.v1, Vertex::new(0, 1));
    assert_eq!(left.v2, Vertex::new(0, 0));
    assert_eq!(left.v3, Vertex::new(1, 0));
    assert_eq!(left.v4, Vertex::new(1, -1));
}

/// Hex neighborhood of a cell under the board convention: row neighbors,
/// column neighbors, and the two anti-diagonal neighbors.
fn hex_neighbors((r, c): Coord) -> impl Iterator<Item = (i64, i64)> {
    let (r, c) = (r as i64, c as i64);
    [
        (r, c - 1),
        (r, c + 1),
        (r - 1, c),
        (r + 1, c),
        (r - 1, c + 1),
        (r + 1, c - 1),
    ]
    .into_iter()
}

#[test]
fn chains_are_locally_connected() {
    for index in 0..50 {
        for side in [2usize, 3, 5, 8] {
            let board = draw_board(side, ReplayToken { seed: 7, index });
            let (_, chain) = solve(&board).unwrap();
            for &coord in &chain {
                let touches_border = hex_neighbors(coord).any(|(r, c)| {
                    r < 0 || c < 0 || r >= side as i64 || c >= side as i64
                });
                let touches_chain = hex_neighbors(coord)
                    .any(|(r, c)| r >= 0 && c >= 0 && chain.contains(&(r as usize, c as usize)));
                assert!(
                    touches_border || touches_chain,
                    "isolated chain cell {coord:?} on side {side}, trial {index}"
                );
            }
        }
    }
}

#[test]
fn winner_is_invariant_under_point_rotation() {
    // Rotating by 180° maps each player's connection task onto itself, so
    // the winner must not change; the chains may differ.
    for index in 0..100 {
        let board = draw_board(7, ReplayToken { seed: 11, index });
        let (winner, _) = solve(&board).unwrap();
        let (rot_winner, rot_chain) = solve(&board.rotate180()).unwrap();
        assert_eq!(winner, rot_winner, "trial {index}");
        for &(r, c) in &rot_chain {
            assert!(r < 7 && c < 7);
        }
    }
}

proptest! {
    /// No-draw property: every fully-filled board has exactly one winner,
    /// and the traced chain stays inside the board.
    #[test]
    fn filled_boards_always_have_a_winner(side in 1usize..9, seed in any::<u64>()) {
        let board = draw_board(side, ReplayToken { seed, index: 0 });
        let (winner, chain) = solve(&board).expect("walk never fails on a filled board");
        prop_assert!(winner == Player::One || winner == Player::Two);
        for &(r, c) in &chain {
            prop_assert!(r < side && c < side);
        }
    }
}
