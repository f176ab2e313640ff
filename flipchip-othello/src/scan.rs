//! Walking a single ray to count the chips a move would capture.

use crate::{Board, Cell, Color, Direction, Player};
use std::convert::TryFrom;

/// Count the opponent chips `player` would capture along `direction` by placing at `origin`.
///
/// The ray starts one step away from `origin`. It captures only if it crosses one or more
/// opponent chips and then reaches one of `player`'s own chips. Running off the board,
/// wrapping around a side edge or hitting an empty cell first all yield 0.
/// The contents of `origin` itself are never read.
pub fn count_captures(board: &Board, player: Player, origin: Cell, direction: Direction) -> u8 {
    let opponent = Color::from(!player);
    let mut index = origin.index() as isize;
    let mut captured = 0;

    loop {
        index += direction.delta();

        let cell = match Cell::try_from(index) {
            Ok(cell) => cell,
            Err(_) => return 0,
        };
        if direction.wrapped(origin, cell) {
            return 0;
        }

        match board.get(cell) {
            Color::Empty => return 0,
            color if color == opponent => captured += 1,
            // Own chip: closes the run, or captures nothing if it is adjacent.
            _ => return captured,
        }
    }
}
