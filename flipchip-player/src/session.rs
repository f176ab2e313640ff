//! One sitting at the board: as many games as the human wants to play.

use crate::connectors::Connector;
use crate::input::Command;
use crate::{Config, PlayerError};
use flipchip_othello::{
    Board, Cell, GameState, MoveObserver, OrderSource, Player, RandomOrder, Turn,
    COMPUTER, HUMAN,
};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Redraws the board as moves are applied. Computer moves are shown highlighted first and
/// held for the configured delay before the flips appear.
struct Pacer<'a, C> {
    connector: &'a mut C,
    delay: Duration,
    error: Option<PlayerError>,
}

impl<'a, C: Connector> Pacer<'a, C> {
    fn new(connector: &'a mut C, delay: Duration) -> Self {
        Self {
            connector,
            delay,
            error: None,
        }
    }

    fn show(&mut self, board: &Board, highlight: Option<Cell>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.connector.show_board(board, highlight) {
            self.error = Some(err);
        }
    }

    /// Surface the first connector error hit while moves were being applied.
    fn finish(self) -> Result<(), PlayerError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<C: Connector> MoveObserver for Pacer<'_, C> {
    fn on_placed(&mut self, board: &Board, player: Player, cell: Cell) {
        if player != COMPUTER {
            return;
        }
        self.show(board, Some(cell));
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn on_flipped(&mut self, board: &Board, _player: Player, _cell: Cell, _flipped: u8) {
        self.show(board, None);
    }
}

pub struct Session<C, S = RandomOrder> {
    game: GameState<S>,
    connector: C,
    config: Config,
}

impl<C: Connector> Session<C, RandomOrder> {
    /// Start a session on a fresh game, seeded if the config says so.
    pub fn new(connector: C, config: Config) -> Self {
        let game = match config.seed {
            Some(seed) => GameState::seeded(seed),
            None => GameState::new(),
        };
        Self::with_game(game, connector, config)
    }
}

impl<C: Connector, S: OrderSource> Session<C, S> {
    pub fn with_game(game: GameState<S>, connector: C, config: Config) -> Self {
        Self {
            game,
            connector,
            config,
        }
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Play until the human quits, declines another game, or input runs out.
    pub fn run(&mut self) -> Result<(), PlayerError> {
        info!(config = ?self.config, "session started");
        self.connector.show_board(self.game.board(), None)?;
        if !self.catch_up()? {
            info!("session ended");
            return Ok(());
        }

        loop {
            let (row, col) = match self.connector.next_command()? {
                Some(Command::Click { row, col }) => (row, col),
                Some(Command::Quit) | None => break,
            };

            let mut pacer = Pacer::new(&mut self.connector, self.config.computer_delay());
            let result = self.game.on_cell_clicked(row, col, &mut pacer);
            pacer.finish()?;

            match result {
                Ok(turn) => {
                    self.report(&turn)?;
                    if turn.finished && !self.finish_game()? {
                        break;
                    }
                }
                Err(err) => {
                    debug!(%err, row, col, "click rejected");
                    self.connector.show_message(&err.to_string())?;
                    if self.config.show_legal_moves {
                        let moves = self.game.legal_moves(HUMAN);
                        self.connector
                            .show_message(&format!("Legal moves: {}", moves))?;
                    }
                }
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Let the computer move first if the human cannot, e.g. when resuming a stored position.
    /// Returns false if the game then ended and the human declined another.
    fn catch_up(&mut self) -> Result<bool, PlayerError> {
        let mut pacer = Pacer::new(&mut self.connector, self.config.computer_delay());
        let placements = self.game.resume(&mut pacer);
        pacer.finish()?;

        if !placements.is_empty() {
            debug!(moves = placements.len(), "computer moved before the first click");
        }
        if self.game.is_finished() {
            return self.finish_game();
        }
        Ok(true)
    }

    fn report(&mut self, turn: &Turn) -> Result<(), PlayerError> {
        if turn.finished {
            return Ok(());
        }
        if turn.computer.is_empty() {
            self.connector
                .show_message("Black has no move and passes. Your turn again.")?;
        } else if turn.computer.len() > 1 {
            self.connector.show_message(&format!(
                "You had no move, so Black played {} times in a row.",
                turn.computer.len()
            ))?;
        }
        Ok(())
    }

    /// Show the final result and ask for another game. Returns whether a new game started.
    fn finish_game(&mut self) -> Result<bool, PlayerError> {
        let summary = self.game.summary();
        self.connector.show_message(&summary.outcome.to_string())?;
        self.connector
            .show_message("There are no available moves left for either player")?;
        self.connector.show_message(&format!(
            "Black has {} chips and White has {} chips",
            summary.black, summary.white
        ))?;

        if !self.connector.confirm("Do you want to play again?")? {
            return Ok(false);
        }

        self.game.reset();
        self.connector.show_board(self.game.board(), None)?;
        Ok(true)
    }
}
