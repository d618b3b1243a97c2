//! The experiment driver: rounds of trials, argmax selection, fixing.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::rand::{draw_board, draw_player, ReplayToken};
use crate::board::Player;
use crate::walk::{self, Chain, WalkError};

use super::types::{
    CountGrid, FixedCells, RoundContext, SearchError, SearchOutcome, SearchParams, Termination,
};

/// Run the adaptive critical-cell search.
///
/// Per round: `trials_per_round` independent trials accumulate per-cell
/// critical counts and the player-One win count; then the most critical free
/// cell is fixed to a fair random value. Rounds repeat until a round ends
/// with an all-zero count grid, or the budget (at most `side²`) is spent.
///
/// Determinism: trial `t` of round `r` draws its board from the replay token
/// `(seed, r * trials_per_round + t)`, and fix-value coins come from a
/// separate stream derived from `seed`. Identical seeds reproduce the full
/// sequence of fixes and histories bit for bit.
///
/// A `WalkError` in any trial aborts the search; the outcome carries the
/// histories accumulated so far with `Termination::Aborted` naming the round
/// and trial (walk failures indicate a construction bug, not a transient).
pub fn run(params: &SearchParams, seed: u64) -> Result<SearchOutcome, SearchError> {
    params.validate()?;
    let n = params.side;
    let trials = params.trials_per_round;
    let cell_budget = n * n;
    let max_rounds = params.max_rounds.unwrap_or(cell_budget).min(cell_budget);

    let mut ctx = RoundContext::new(n, trials);
    // Separate stream from the trial tokens so fix draws never shift the
    // per-trial board sequence.
    let mut fix_rng = StdRng::seed_from_u64(seed.wrapping_add(0x9e3779b97f4a7c15));

    for round in 0..max_rounds {
        let mut counts = CountGrid::zeros(n);
        let mut win1 = 0usize;

        for trial in 0..trials {
            let tok = ReplayToken {
                seed,
                index: (round * trials + trial) as u64,
            };
            match run_trial(n, tok, &ctx.fixed, &mut counts) {
                Ok(one_won) => {
                    if one_won {
                        win1 += 1;
                    }
                }
                Err(error) => {
                    return Ok(ctx.into_outcome(Termination::Aborted {
                        round,
                        trial,
                        error,
                    }));
                }
            }
        }

        let (coord, max_val) = match counts.argmax() {
            Some(found) => found,
            None => return Ok(ctx.into_outcome(Termination::Converged)),
        };
        let second = counts.second_distinct_max(max_val);
        ctx.margin_history
            .push(f64::from(max_val - second) / f64::from(max_val));
        ctx.win1_history.push(win1 as f64 / trials as f64);
        ctx.max_val_history.push(f64::from(max_val) / trials as f64);
        ctx.fixed.push(coord, draw_player(&mut fix_rng));
    }

    Ok(ctx.into_outcome(Termination::RoundBudget))
}

/// One trial: draw, overlay, solve both orientations, count the critical
/// cells. Returns whether player One won the (un-rotated) board.
fn run_trial(
    side: usize,
    tok: ReplayToken,
    fixed: &FixedCells,
    counts: &mut CountGrid,
) -> Result<bool, WalkError> {
    let mut board = draw_board(side, tok);
    fixed.overlay(&mut board);

    let (winner, chain) = walk::solve(&board)?;
    let (_rot_winner, rot_chain) = walk::solve(&board.rotate180())?;

    // Map the rotated chain back into the original frame before
    // intersecting.
    let rot_back: Chain = rot_chain
        .into_iter()
        .map(|(r, c)| (side - 1 - r, side - 1 - c))
        .collect();

    for &coord in chain.intersection(&rot_back) {
        // A fixed cell is never rediscovered as critical; its count stays
        // zero for the rest of the experiment.
        if !fixed.contains(coord) {
            counts.incr(coord);
        }
    }

    Ok(winner == Player::One)
}
