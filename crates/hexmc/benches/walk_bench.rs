//! Criterion microbenches for the boundary walk and the sampler.
//!
//! - `draw_board`: per-cell Bernoulli sampling cost at experiment sizes.
//! - `solve`: the O(n) walk on random boards; the experiment's hot path
//!   (two solves per trial).
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexmc::board::rand::{draw_board, ReplayToken};
use hexmc::walk::solve;

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");
    for side in [11usize, 31, 63] {
        group.bench_function(BenchmarkId::new("draw_board", side), |b| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _ = draw_board(side, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    for side in [11usize, 31, 63] {
        let boards: Vec<_> = (0..64)
            .map(|index| draw_board(side, ReplayToken { seed: 7, index }))
            .collect();
        let mut next = 0usize;
        group.bench_function(BenchmarkId::new("solve", side), |b| {
            b.iter(|| {
                let board = &boards[next % boards.len()];
                next = next.wrapping_add(1);
                solve(board).expect("filled board always has a winner")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampler, bench_walk);
criterion_main!(benches);
