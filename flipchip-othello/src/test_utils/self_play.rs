//! Whole games where the human's side is also played by the greedy heuristic.

use crate::apply::MoveObserver;
use crate::{Board, Cell, Color, GameState, Player, RandomOrder, Summary, HUMAN};

/// What happened in one self-played game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelfPlayRecord {
    pub summary: Summary,
    /// Chips placed by both sides, which is also the number of cells filled.
    pub moves: usize,
    /// Chips flipped over the whole game.
    pub flips: usize,
}

/// Checks the bookkeeping of every move as it is applied.
#[derive(Default)]
struct InvariantChecker {
    placed: Option<(u8, u8, u8)>,
    moves: usize,
    flips: usize,
}

impl MoveObserver for InvariantChecker {
    fn on_placed(&mut self, board: &Board, player: Player, cell: Cell) {
        assert_eq!(board.get(cell), Color::from(player));
        self.placed = Some((
            board.count(Color::from(player)),
            board.count(Color::from(!player)),
            board.count_empty(),
        ));
    }

    fn on_flipped(&mut self, board: &Board, player: Player, _cell: Cell, flipped: u8) {
        let (own, other, empty) = self.placed.take().expect("on_flipped before on_placed");
        assert!(flipped > 0, "a move in a real game must capture");
        assert_eq!(board.count(Color::from(player)), own + flipped);
        assert_eq!(board.count(Color::from(!player)), other - flipped);
        assert_eq!(board.count_empty(), empty);
        self.moves += 1;
        self.flips += flipped as usize;
    }
}

/// Play one complete game from a seeded order, with the human's moves chosen by
/// [`GameState::best_move`].
///
/// Panics if any move breaks the chip bookkeeping or the turn protocol.
pub fn play_self(seed: u64) -> SelfPlayRecord {
    let mut game = GameState::<RandomOrder>::seeded(seed);
    let mut checker = InvariantChecker::default();

    while !game.is_finished() {
        let cell = game
            .best_move(HUMAN, false)
            .expect("an unfinished game always leaves the human a move");
        let turn = game
            .play_human(cell, &mut checker)
            .expect("the greedy choice is always legal");
        assert_eq!(turn.finished, game.is_finished());
        assert!(turn.finished || game.human_has_move());
    }

    let summary = game.summary();
    assert_eq!(
        usize::from(summary.black) + usize::from(summary.white),
        checker.moves + 4
    );

    SelfPlayRecord {
        summary,
        moves: checker.moves,
        flips: checker.flips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_games_repeat() {
        assert_eq!(play_self(11), play_self(11));
    }

    #[test]
    fn games_run_to_completion() {
        for seed in 0..5 {
            let record = play_self(seed);
            assert!(record.moves <= 60);
            assert!(record.flips >= record.moves);
        }
    }
}
