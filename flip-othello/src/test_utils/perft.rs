//! "Perft" performance test: count the number of leaves at a given depth.
//! Every move is expanded, so the count depends only on which cells are
//! occupied, not on the capture rule.

use crate::{CaptureRule, Game};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::new(CaptureRule::default()), depth)
}

fn leaves_below(game: Game, depth: u64) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves: Vec<_> = game.board().playable().collect();
    // Full board: nothing left to play
    if moves.is_empty() {
        return 1;
    }

    moves
        .into_iter()
        .map(|pos| {
            let mut next = game;
            next.apply_move(pos);
            leaves_below(next, depth - 1)
        })
        .sum()
}

#[test]
fn perft_00() {
    assert_eq!(run_perft(0), 1);
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 12);
}

// Corners of the opening ring open 5 new cells, edges open 3.
#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 4 * 16 + 8 * 14);
}
