//! The board: 64 cells, each empty or holding one player's chip.
//!
//! Boards can be written as 64 symbols for fixtures and debugging: `.` (or `-`) for an empty
//! cell, `#`, `B` or `X` for Black and `O` or `W` for White. Whitespace is ignored, so a
//! board may be laid out as eight lines of eight.

use crate::{utils, Cell, OthelloError, NUM_SPACES};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Formatter};

/// One of the two players. Black is the computer; White is the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// The contents of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Black,
    White,
}

impl Color {
    /// The player owning a chip of this color, if there is a chip.
    pub fn player(self) -> Option<Player> {
        match self {
            Color::Empty => None,
            Color::Black => Some(Player::Black),
            Color::White => Some(Player::White),
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Black => '#',
            Color::White => 'O',
        }
    }
}

impl From<Player> for Color {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Color::Black,
            Player::White => Color::White,
        }
    }
}

/// A fixed 8x8 grid of chips, indexed by [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Color; NUM_SPACES],
}

impl Default for Board {
    /// Gets the opening position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with no chips on it.
    pub const fn empty() -> Self {
        Self {
            cells: [Color::Empty; NUM_SPACES],
        }
    }

    /// The standard opening: White on D4 and E5, Black on E4 and D5.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board.set(Cell::new_unchecked(27), Color::White);
        board.set(Cell::new_unchecked(28), Color::Black);
        board.set(Cell::new_unchecked(35), Color::Black);
        board.set(Cell::new_unchecked(36), Color::White);
        board
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Color {
        self.cells[cell.index()]
    }

    /// Read a cell by raw index, failing for anything off the board.
    pub fn try_get(&self, index: isize) -> Result<Color, OthelloError> {
        Cell::try_from(index).map(|cell| self.get(cell))
    }

    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, color: Color) {
        self.cells[cell.index()] = color;
    }

    /// Count the cells holding `color`.
    pub fn count(&self, color: Color) -> u8 {
        self.cells.iter().filter(|&&c| c == color).count() as u8
    }

    pub fn count_empty(&self) -> u8 {
        self.count(Color::Empty)
    }

    pub fn count_occupied(&self) -> u8 {
        NUM_SPACES as u8 - self.count_empty()
    }

    /// Iterate over every cell and its contents in index order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        Cell::all().map(move |cell| (cell, self.get(cell)))
    }

    /// Display the board with `cell` marked by `*`, e.g. to show where a chip is about to land.
    pub fn highlight(&self, cell: Cell) -> Highlighted<'_> {
        Highlighted { board: self, cell }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|color| color.symbol()), f)
    }
}

pub struct Highlighted<'a> {
    board: &'a Board,
    cell: Cell,
}

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let symbols = self.board.cells().map(|(cell, color)| {
            if cell == self.cell {
                '*'
            } else {
                color.symbol()
            }
        });
        utils::format_grid(symbols, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 cells but found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unrecognized cell symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(board_str: &str) -> Result<Self, Self::Err> {
        let colors = board_str
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| match symbol {
                '.' | '-' => Ok(Color::Empty),
                '#' | 'B' | 'X' => Ok(Color::Black),
                'O' | 'W' => Ok(Color::White),
                _ => Err(ParseBoardError::UnknownSymbol { symbol }),
            })
            .collect::<Result<Vec<Color>, _>>()?;

        if colors.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: colors.len(),
            });
        }

        let mut board = Self::empty();
        for (cell, color) in Cell::all().zip(colors) {
            board.set(cell, color);
        }
        Ok(board)
    }
}
