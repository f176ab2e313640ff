use crate::input::Command;
use crate::PlayerError;
use flipchip_othello::{Board, Cell};

/// A player-facing abstract interface to the human at the other end of a session.
pub trait Connector {
    /// Block until the human enters a command. `None` means no more input will ever arrive.
    fn next_command(&mut self) -> Result<Option<Command>, PlayerError>;

    /// Draw `board` and both scores, marking `highlight` if given.
    fn show_board(&mut self, board: &Board, highlight: Option<Cell>) -> Result<(), PlayerError>;

    fn show_message(&mut self, message: &str) -> Result<(), PlayerError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str) -> Result<bool, PlayerError>;
}
