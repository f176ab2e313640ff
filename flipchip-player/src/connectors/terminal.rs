//! [`Connector`] for a line-based terminal.

use super::Connector;
use crate::input::{Command, ParseCommandError};
use crate::PlayerError;
use flipchip_othello::{Board, Cell, Color};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

pub struct TerminalConnector<R, W> {
    input: R,
    output: W,
}

impl TerminalConnector<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, PlayerError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Connector for TerminalConnector<R, W> {
    fn next_command(&mut self) -> Result<Option<Command>, PlayerError> {
        loop {
            let line = match self.prompt("Your move: ")? {
                Some(line) => line,
                None => return Ok(None),
            };

            match line.parse::<Command>() {
                Ok(command) => {
                    debug!(?command, "read command");
                    return Ok(Some(command));
                }
                Err(ParseCommandError::Empty) => continue,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn show_board(&mut self, board: &Board, highlight: Option<Cell>) -> Result<(), PlayerError> {
        match highlight {
            Some(cell) => writeln!(self.output, "\n{}", board.highlight(cell))?,
            None => writeln!(self.output, "\n{}", board)?,
        }
        writeln!(
            self.output,
            "Black: {}  White: {}",
            board.count(Color::Black),
            board.count(Color::White)
        )?;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<(), PlayerError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> Result<bool, PlayerError> {
        let answer = self.prompt(&format!("{} [y/N] ", question))?;
        Ok(answer.map_or(false, |answer| {
            answer.trim().to_ascii_lowercase().starts_with('y')
        }))
    }
}
