//! Committing a move: placing the chip and flipping every captured run.

use crate::{captures_for_cell, count_captures, Board, Cell, Color, Direction, OthelloError, Player};
use std::convert::TryFrom;
use tracing::debug;

/// Hooks into move application, so a presentation layer can pace or animate moves without
/// the board logic knowing about it. Both hooks default to doing nothing.
pub trait MoveObserver {
    /// Called once the chip is on `cell`, before any chip is flipped.
    fn on_placed(&mut self, _board: &Board, _player: Player, _cell: Cell) {}

    /// Called after every captured run has been flipped.
    fn on_flipped(&mut self, _board: &Board, _player: Player, _cell: Cell, _flipped: u8) {}
}

/// An observer that ignores every move.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MoveObserver for NoopObserver {}

/// Place `player`'s chip on `cell` and flip every captured run, returning the number of
/// chips flipped.
///
/// This does not check that the move is legal. On an occupied or non-capturing cell it
/// still places the chip; use [`try_apply_move`] when the move comes from outside.
pub fn apply_move<O: MoveObserver + ?Sized>(
    board: &mut Board,
    player: Player,
    cell: Cell,
    observer: &mut O,
) -> u8 {
    let color = Color::from(player);
    board.set(cell, color);
    observer.on_placed(board, player, cell);

    let mut flipped = 0;
    for direction in Direction::ALL.iter().copied() {
        if count_captures(board, player, cell, direction) == 0 {
            continue;
        }

        let mut index = cell.index() as isize;
        loop {
            index += direction.delta();
            match Cell::try_from(index) {
                Ok(next) if board.get(next) != color => {
                    board.set(next, color);
                    flipped += 1;
                }
                _ => break,
            }
        }
    }

    debug!(%player, %cell, flipped, "move applied");
    observer.on_flipped(board, player, cell, flipped);
    flipped
}

/// Like [`apply_move`], but refuses occupied cells and moves that capture nothing,
/// leaving the board untouched.
pub fn try_apply_move<O: MoveObserver + ?Sized>(
    board: &mut Board,
    player: Player,
    cell: Cell,
    observer: &mut O,
) -> Result<u8, OthelloError> {
    if board.get(cell) != Color::Empty || captures_for_cell(board, player, cell) == 0 {
        return Err(OthelloError::IllegalMove { cell });
    }
    Ok(apply_move(board, player, cell, observer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        name.parse().unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        placed: Vec<(Player, Cell, u8)>,
        flipped: Vec<(Player, Cell, u8)>,
    }

    impl MoveObserver for Recorder {
        fn on_placed(&mut self, board: &Board, player: Player, cell: Cell) {
            self.placed.push((player, cell, board.count(Color::from(player))));
        }

        fn on_flipped(&mut self, board: &Board, player: Player, cell: Cell, flipped: u8) {
            assert_eq!(board.get(cell), Color::from(player));
            self.flipped.push((player, cell, flipped));
        }
    }

    #[test]
    fn opening_move_flips_one_chip() {
        let mut board = Board::starting();
        let flipped = apply_move(&mut board, Player::White, cell("D6"), &mut NoopObserver);
        assert_eq!(flipped, 1);
        assert_eq!(board.get(cell("D5")), Color::White);
        assert_eq!(board.count(Color::White), 4);
        assert_eq!(board.count(Color::Black), 1);
    }

    #[test]
    fn flips_match_capture_count() {
        let mut board: Board = "
            #..#..#.
            .O.O.O..
            ..OOO...
            #OO.OOO#
            ..OOO...
            .O.O.O..
            #..#..#.
            ........"
            .parse()
            .unwrap();
        let before = board;
        let captures = captures_for_cell(&board, Player::Black, cell("D4"));
        assert_eq!(captures, 17);

        let flipped = apply_move(&mut board, Player::Black, cell("D4"), &mut NoopObserver);
        assert_eq!(flipped, captures);
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(
            board.count(Color::Black),
            before.count(Color::Black) + 1 + flipped
        );
    }

    #[test]
    fn cells_off_capturing_rays_are_untouched() {
        let mut board: Board = "
            ........
            ........
            ..O.....
            ..#O....
            ..OO#...
            ..#.....
            ........
            ........"
            .parse()
            .unwrap();
        let before = board;
        let target = cell("E4");
        let flipped = apply_move(&mut board, Player::Black, target, &mut NoopObserver);

        // Only D4 (west) and D5 (south-west) lie between E4 and a Black chip.
        assert_eq!(flipped, 2);
        for (c, color) in board.cells() {
            let expected = if c == target || c == cell("D4") || c == cell("D5") {
                Color::Black
            } else {
                before.get(c)
            };
            assert_eq!(color, expected, "cell {}", c);
        }
    }

    #[test]
    fn terminating_chip_is_not_rewritten() {
        let mut board: Board = "
            ........
            ........
            ........
            .OO#O#..
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let flipped = apply_move(&mut board, Player::Black, cell("A4"), &mut NoopObserver);
        assert_eq!(flipped, 2);
        // The White chip beyond the closing Black chip keeps its color.
        assert_eq!(board.get(cell("E4")), Color::White);
    }

    #[test]
    fn observer_sees_placement_before_flips() {
        let mut board = Board::starting();
        let mut recorder = Recorder::default();
        apply_move(&mut board, Player::Black, cell("D3"), &mut recorder);

        // On placement Black has its two opening chips plus the new one.
        assert_eq!(recorder.placed, vec![(Player::Black, cell("D3"), 3)]);
        assert_eq!(recorder.flipped, vec![(Player::Black, cell("D3"), 1)]);
    }

    #[test]
    fn illegal_moves_are_rejected() {
        let mut board = Board::starting();
        let before = board;

        assert_eq!(
            try_apply_move(&mut board, Player::White, cell("D4"), &mut NoopObserver),
            Err(OthelloError::IllegalMove { cell: cell("D4") })
        );
        assert_eq!(
            try_apply_move(&mut board, Player::White, cell("A1"), &mut NoopObserver),
            Err(OthelloError::IllegalMove { cell: cell("A1") })
        );
        assert_eq!(board, before);

        assert_eq!(
            try_apply_move(&mut board, Player::White, cell("E3"), &mut NoopObserver),
            Ok(1)
        );
    }
}
