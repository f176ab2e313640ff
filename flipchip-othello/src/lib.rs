//! `flipchip-othello` is the rules engine behind FlipChip, an Othello game between one
//! human (White) and a greedy computer opponent (Black).
//!
//! The crate is layered from the bottom up:
//!
//!  - [`Cell`], [`Direction`] and [`Board`] describe the 8x8 grid and its chips.
//!  - [`scan`] walks a single ray from a cell and counts the chips a move would capture.
//!  - [`eval`] aggregates rays into legality checks and picks the computer's move.
//!  - [`apply`] commits a move to a board, flipping every captured run.
//!  - [`GameState`] owns one game: the board, the computer's cell ordering, the turn
//!    protocol and end-of-game detection.
//!
//! Nothing here draws or waits. A presentation layer drives [`GameState::on_cell_clicked`]
//! and can hook into move application through a [`MoveObserver`].

pub mod apply;
pub mod eval;
pub mod scan;
pub mod test_utils;

mod board;
mod cell;
mod error;
mod game;
mod order;
mod utils;

pub use apply::{apply_move, try_apply_move, MoveObserver, NoopObserver};
pub use board::*;
pub use cell::*;
pub use error::OthelloError;
pub use eval::{
    best_move, captures_for_cell, has_legal_move, is_legal_move, legal_moves, LegalMoves,
    EDGE_BONUS,
};
pub use game::*;
pub use order::*;
pub use scan::count_captures;

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on the board.
pub const NUM_SPACES: usize = 64;
