use crate::Cell;
use derive_more::{Display, Error};

/// Errors raised by the rules engine. All of them are recoverable: the board is left
/// untouched and the caller can simply wait for the next input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum OthelloError {
    /// An index that does not name one of the 64 cells.
    #[display(fmt = "index {} is off the board", index)]
    OutOfRange { index: isize },

    /// A placement on an occupied cell, or one that captures nothing.
    #[display(fmt = "{} is not a legal move", cell)]
    IllegalMove { cell: Cell },

    /// A play order that is not a permutation of all 64 cells.
    #[display(fmt = "play order must visit every cell exactly once")]
    InvalidPlayOrder,
}
