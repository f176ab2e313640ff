//! Move legality and the computer's greedy move choice.

use crate::{count_captures, Board, Cell, Color, Direction, PlayOrder, Player};
use itertools::Itertools;
use std::fmt;
use tracing::trace;

/// Score added for a cell on the top or bottom row, and again for one on the left or right
/// column, so corners receive it twice. This is a fixed heuristic weight, not a positional table.
pub const EDGE_BONUS: u32 = 256;

/// Total chips `player` would capture by placing at `cell`, summed over all eight directions.
pub fn captures_for_cell(board: &Board, player: Player, cell: Cell) -> u8 {
    Direction::ALL
        .iter()
        .map(|&direction| count_captures(board, player, cell, direction))
        .sum()
}

/// A move is legal on an empty cell that captures at least one chip.
pub fn is_legal_move(board: &Board, player: Player, cell: Cell) -> bool {
    board.get(cell) == Color::Empty && captures_for_cell(board, player, cell) > 0
}

fn edge_bonus(cell: Cell) -> u32 {
    let mut bonus = 0;
    if cell.on_edge_row() {
        bonus += EDGE_BONUS;
    }
    if cell.on_edge_col() {
        bonus += EDGE_BONUS;
    }
    bonus
}

/// Heuristic value of playing `cell`, or None if the move is not legal.
pub fn move_score(board: &Board, player: Player, cell: Cell) -> Option<u32> {
    if board.get(cell) != Color::Empty {
        return None;
    }

    match captures_for_cell(board, player, cell) {
        0 => None,
        captures => Some(u32::from(captures) + edge_bonus(cell)),
    }
}

/// Pick the highest-scoring legal move for `player`, examining cells in `order`.
///
/// Ties go to whichever cell comes first in `order`. With `any_move_only` the search stops at
/// the first legal cell, which turns this into a cheap "can `player` move at all" check.
/// Returns None if `player` has no legal move.
pub fn best_move(
    board: &Board,
    order: &PlayOrder,
    player: Player,
    any_move_only: bool,
) -> Option<Cell> {
    let mut best: Option<(Cell, u32)> = None;

    for cell in order.iter() {
        let score = match move_score(board, player, cell) {
            Some(score) => score,
            None => continue,
        };

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
            if any_move_only {
                break;
            }
        }
    }

    trace!(?player, ?best, any_move_only, "best move search");
    best.map(|(cell, _)| cell)
}

/// Whether `player` has any legal move at all.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Cell::all().any(|cell| is_legal_move(board, player, cell))
}

/// Every legal move for `player`.
pub fn legal_moves(board: &Board, player: Player) -> LegalMoves {
    let mask = Cell::all()
        .filter(|&cell| is_legal_move(board, player, cell))
        .fold(0u64, |mask, cell| mask | (1 << cell.index()));
    LegalMoves(mask)
}

/// A set of legal moves, which can be iterated in index order to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LegalMoves(u64);

impl LegalMoves {
    /// Returns whether `cell` is in this list.
    pub fn contains(self, cell: Cell) -> bool {
        self.0 & (1 << cell.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Iterator for LegalMoves {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Cell::new_unchecked(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LegalMoves {}

impl fmt::Display for LegalMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
