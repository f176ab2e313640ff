//! "Perft" performance test: count the number of leaves at a given depth.
//! The counts from the standard opening are published, which makes this a check on
//! legality detection and flip propagation as much as a benchmark.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::apply::{apply_move, NoopObserver};
use crate::{legal_moves, Board, Player};

/// Count the leaves of the move tree `depth` plies below the opening, with Black to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::starting(), Player::Black, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(&board, player);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    moves
        .map(|cell| {
            let mut child = board;
            apply_move(&mut child, player, cell, &mut NoopObserver);
            leaves_below(child, !player, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
#[ignore]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
#[ignore]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}
