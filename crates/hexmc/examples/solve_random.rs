//! Walk probe: solve a handful of random boards and print both orientations.
//!
//! Purpose
//! - Eyeball the boundary walk on small boards: the grid, the winner, the
//!   traced chain size, and the 180°-rotated solve side by side.
//! - Give a quick timing data point for the walk at a given side length.

use std::time::Instant;

use hexmc::board::rand::{draw_board, ReplayToken};
use hexmc::walk::solve;

fn main() {
    let side = 5;
    for index in 0..3u64 {
        let board = draw_board(side, ReplayToken { seed: 42, index });
        println!("board #{index}:");
        print!("{board}");

        let start = Instant::now();
        let (winner, chain) = solve(&board).expect("filled board always has a winner");
        let elapsed = start.elapsed().as_secs_f64() * 1e6;

        let (rot_winner, rot_chain) =
            solve(&board.rotate180()).expect("rotated board stays filled");

        println!("winner={winner:?} chain_len={} walk_time_us={elapsed:.1}", chain.len());
        println!(
            "rotated: winner={rot_winner:?} chain_len={}",
            rot_chain.len()
        );
        println!();
    }
}
