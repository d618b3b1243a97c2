//! Reproducible Bernoulli board sampling (fair coin per cell).
//!
//! Model
//! - Every cell is drawn independently and uniformly from `{One, Two}`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so trial `index` can be regenerated in isolation and trials never
//!   share generator state (each token owns its stream).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, Player};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One fair `{One, Two}` draw.
#[inline]
pub fn draw_player<R: Rng>(rng: &mut R) -> Player {
    if rng.gen::<bool>() {
        Player::One
    } else {
        Player::Two
    }
}

/// Draw a fully-filled board, one independent fair coin per cell.
pub fn draw_board(side: usize, tok: ReplayToken) -> Board {
    let mut rng = tok.to_std_rng();
    Board::from_fn(side, |_, _| draw_player(&mut rng))
}
