//! Code for working with [`Cell`]s and [`Direction`]s on the board.

use crate::{OthelloError, EDGE_LENGTH, NUM_SPACES};
use derive_more::Into;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter, Write};

const COLUMN_NAMES: &str = "ABCDEFGH";
const ROW_NAMES: &str = "12345678";

/// A cell on the board, stored as a row-major index: 0 is the upper-left corner,
/// 63 the lower-right.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Into)]
pub struct Cell(u8);

impl Cell {
    /// Convert from a row-major index.
    pub fn new(index: usize) -> Result<Self, OthelloError> {
        if index < NUM_SPACES {
            Ok(Self(index as u8))
        } else {
            Err(OthelloError::OutOfRange {
                index: reported_index(index),
            })
        }
    }

    /// Convert from an index already known to be below [`NUM_SPACES`].
    #[inline]
    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// Convert from row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, OthelloError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(OthelloError::OutOfRange {
                index: reported_index(row.saturating_mul(EDGE_LENGTH).saturating_add(col)),
            });
        }
        Ok(Self((row * EDGE_LENGTH + col) as u8))
    }

    /// The row-major index of this cell.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % EDGE_LENGTH
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Whether this cell is in the top or bottom row.
    pub fn on_edge_row(self) -> bool {
        self.row() == 0 || self.row() == EDGE_LENGTH - 1
    }

    /// Whether this cell is in the leftmost or rightmost column.
    pub fn on_edge_col(self) -> bool {
        self.col() == 0 || self.col() == EDGE_LENGTH - 1
    }

    /// Whether this cell lies on the outermost ring of the board.
    pub fn is_edge(self) -> bool {
        self.on_edge_row() || self.on_edge_col()
    }

    /// Iterate over every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NUM_SPACES as u8).map(Cell)
    }
}

/// Huge indices are reported as `isize::MAX` instead of wrapping negative.
fn reported_index(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Signed indices show up while walking rays; anything outside `[0, 64)` has run off the board.
impl TryFrom<isize> for Cell {
    type Error = OthelloError;

    fn try_from(index: isize) -> Result<Self, Self::Error> {
        if (0..NUM_SPACES as isize).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(OthelloError::OutOfRange { index })
        }
    }
}

/// Convert this [`Cell`] into string notation ("D3").
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_NAMES.chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = ROW_NAMES.chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseCellError;

impl Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell string")
    }
}

impl std::error::Error for ParseCellError {}

/// Build a [`Cell`] from 1-indexed string notation: a column letter then a row digit ("d3").
impl std::str::FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseCellError)?.to_ascii_uppercase();
        let col = COLUMN_NAMES.find(col_str).ok_or(ParseCellError)?;
        let row = chars
            .next()
            .ok_or(ParseCellError)?
            .to_digit(10)
            .ok_or(ParseCellError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseCellError);
        }

        Self::from_coords(row - 1, col).map_err(|_| ParseCellError)
    }
}

/// One of the eight rays leaving a cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The change in row-major index for one step in this direction.
    pub const fn delta(self) -> isize {
        const COLUMNS: isize = EDGE_LENGTH as isize;
        match self {
            Direction::North => -COLUMNS,
            Direction::South => COLUMNS,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => -(COLUMNS - 1),
            Direction::SouthEast => COLUMNS + 1,
            Direction::SouthWest => COLUMNS - 1,
            Direction::NorthWest => -(COLUMNS + 1),
        }
    }

    /// Whether stepping from `origin` to `next` left the board sideways and reappeared on the
    /// opposite edge. Vertical rays can only leave through the top or bottom, which shows up as
    /// an out-of-range index instead.
    pub(crate) fn wrapped(self, origin: Cell, next: Cell) -> bool {
        match self {
            Direction::East | Direction::West => next.row() != origin.row(),
            Direction::NorthWest | Direction::SouthWest => next.col() >= origin.col(),
            Direction::NorthEast | Direction::SouthEast => next.col() <= origin.col(),
            Direction::North | Direction::South => false,
        }
    }
}
