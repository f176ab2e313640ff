//! Implements game-level FlipChip logic.
//!
//! [`GameState`] owns everything that lives for one game: the board and the order in which
//! the computer examines cells. The presentation layer talks to the engine only through it.

use crate::apply::{apply_move, MoveObserver};
use crate::{
    best_move, is_legal_move, legal_moves, Board, Cell, Color, LegalMoves, OrderSource,
    OthelloError, PlayOrder, Player, RandomOrder,
};
use std::fmt;
use tracing::{debug, info};

/// The computer always plays Black.
pub const COMPUTER: Player = Player::Black;

/// The human always plays White.
pub const HUMAN: Player = Player::White;

/// A chip that was placed, and how many chips it flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub cell: Cell,
    pub flipped: u8,
}

/// Everything that happened in response to one human click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub human: Placement,
    /// The computer's replies, in order. Empty if the computer had to pass; longer than one
    /// if the human had no legal answer to the computer's move.
    pub computer: Vec<Placement>,
    pub finished: bool,
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Final (or current) chip counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub black: u8,
    pub white: u8,
    pub outcome: Outcome,
}

/// The complete state of one game.
///
/// A new order is drawn from the [`OrderSource`] on every [`reset`](GameState::reset), so the
/// computer breaks ties differently from game to game.
#[derive(Clone, Debug)]
pub struct GameState<S = RandomOrder> {
    board: Board,
    order: PlayOrder,
    source: S,
}

impl GameState<RandomOrder> {
    /// A fresh game with randomly shuffled play orders.
    pub fn new() -> Self {
        Self::with_source(RandomOrder::from_entropy())
    }

    /// A fresh game whose play orders are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RandomOrder::seeded(seed))
    }
}

impl Default for GameState<RandomOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OrderSource> GameState<S> {
    /// A fresh game in the opening position.
    pub fn with_source(source: S) -> Self {
        let mut game = Self {
            board: Board::empty(),
            order: PlayOrder::identity(),
            source,
        };
        game.reset();
        game
    }

    /// Resume from an arbitrary position instead of the opening.
    ///
    /// The position may leave the human without a move; call [`resume`](GameState::resume)
    /// before taking clicks so the computer plays until the human can answer.
    pub fn from_position(board: Board, mut source: S) -> Self {
        let order = source.next_order();
        Self {
            board,
            order,
            source,
        }
    }

    /// Discard the current game and set up the opening position with a new play order.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.order = self.source.next_order();
        info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn play_order(&self) -> &PlayOrder {
        &self.order
    }

    /// What the presentation layer should draw on `cell`.
    pub fn color_at(&self, cell: Cell) -> Color {
        self.board.get(cell)
    }

    /// Number of chips `player` has on the board.
    pub fn score(&self, player: Player) -> u8 {
        self.board.count(Color::from(player))
    }

    /// The computer's choice for `player` in the current position.
    pub fn best_move(&self, player: Player, any_move_only: bool) -> Option<Cell> {
        best_move(&self.board, &self.order, player, any_move_only)
    }

    /// Whether `player` has any legal move.
    pub fn has_move(&self, player: Player) -> bool {
        self.best_move(player, true).is_some()
    }

    pub fn human_has_move(&self) -> bool {
        self.has_move(HUMAN)
    }

    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        legal_moves(&self.board, player)
    }

    /// The game ends when neither player can move, which a full board implies.
    pub fn is_finished(&self) -> bool {
        !self.has_move(Player::White) && !self.has_move(Player::Black)
    }

    /// Handle a click on the cell at (`row`, `col`).
    pub fn on_cell_clicked<O: MoveObserver + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        observer: &mut O,
    ) -> Result<Turn, OthelloError> {
        let cell = Cell::from_coords(row, col)?;
        self.play_human(cell, observer)
    }

    /// Play the human's move at `cell`, then let the computer answer.
    ///
    /// The computer keeps moving for as long as the human has no legal reply and the game
    /// is not over. Illegal clicks are rejected without touching the board.
    pub fn play_human<O: MoveObserver + ?Sized>(
        &mut self,
        cell: Cell,
        observer: &mut O,
    ) -> Result<Turn, OthelloError> {
        if !is_legal_move(&self.board, HUMAN, cell) {
            debug!(%cell, "rejected illegal click");
            return Err(OthelloError::IllegalMove { cell });
        }

        let flipped = apply_move(&mut self.board, HUMAN, cell, observer);
        let human = Placement {
            player: HUMAN,
            cell,
            flipped,
        };

        let mut computer = Vec::new();
        loop {
            computer.extend(self.computer_move(observer));
            if self.human_has_move() || self.is_finished() {
                break;
            }
        }

        let finished = self.is_finished();
        if finished {
            let summary = self.summary();
            info!(
                black = summary.black,
                white = summary.white,
                outcome = %summary.outcome,
                "game over"
            );
        }

        Ok(Turn {
            human,
            computer,
            finished,
        })
    }

    /// Let the computer move for as long as the human is stuck and the game is not over,
    /// returning its placements. Does nothing when the human can already move.
    pub fn resume<O: MoveObserver + ?Sized>(&mut self, observer: &mut O) -> Vec<Placement> {
        let mut placements = Vec::new();
        while !self.human_has_move() && !self.is_finished() {
            match self.computer_move(observer) {
                Some(placement) => placements.push(placement),
                None => break,
            }
        }
        placements
    }

    /// Play the computer's best move, if it has one.
    pub fn computer_move<O: MoveObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Option<Placement> {
        let cell = self.best_move(COMPUTER, false)?;
        let flipped = apply_move(&mut self.board, COMPUTER, cell, observer);
        Some(Placement {
            player: COMPUTER,
            cell,
            flipped,
        })
    }

    /// Who is ahead on chips. Only meaningful as a final result once the game is finished.
    pub fn outcome(&self) -> Outcome {
        let black = self.score(Player::Black);
        let white = self.score(Player::White);
        if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Tie
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            black: self.score(Player::Black),
            white: self.score(Player::White),
            outcome: self.outcome(),
        }
    }
}

impl<S> fmt::Display for GameState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "Black: {}  White: {}",
            self.board.count(Color::Black),
            self.board.count(Color::White)
        )
    }
}
