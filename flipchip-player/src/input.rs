//! Parsing one line of user input into a [`Command`].

use derive_more::{Display, Error};
use flipchip_othello::Cell;
use std::str::FromStr;

/// What the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A click on the cell at 0-indexed (`row`, `col`). Range is checked by the engine.
    Click { row: usize, col: usize },
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    #[display(fmt = "nothing entered")]
    Empty,
    #[display(
        fmt = "cannot read {:?} as a move; enter a cell like \"d3\", a row and column like \"2 3\", or \"quit\"",
        input
    )]
    Unrecognized { input: String },
}

/// Accepts algebraic cells ("d3", "D3"), 0-indexed "row col" pairs, and "q" or "quit".
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unrecognized = || ParseCommandError::Unrecognized {
            input: trimmed.to_string(),
        };

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(ParseCommandError::Empty),
            [word] if word.eq_ignore_ascii_case("q") || word.eq_ignore_ascii_case("quit") => {
                Ok(Command::Quit)
            }
            [name] => {
                let cell: Cell = name.parse().map_err(|_| unrecognized())?;
                Ok(Command::Click {
                    row: cell.row(),
                    col: cell.col(),
                })
            }
            [row, col] => {
                let row = row.parse().map_err(|_| unrecognized())?;
                let col = col.parse().map_err(|_| unrecognized())?;
                Ok(Command::Click { row, col })
            }
            _ => Err(unrecognized()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, ParseCommandError> {
        s.parse()
    }

    #[test]
    fn algebraic() {
        assert_eq!(parse("d3"), Ok(Command::Click { row: 2, col: 3 }));
        assert_eq!(parse(" E3\n"), Ok(Command::Click { row: 2, col: 4 }));
        assert_eq!(parse("h8"), Ok(Command::Click { row: 7, col: 7 }));
    }

    #[test]
    fn row_and_column() {
        assert_eq!(parse("2 4"), Ok(Command::Click { row: 2, col: 4 }));
        // Out-of-range coordinates are the engine's call.
        assert_eq!(parse("9 0"), Ok(Command::Click { row: 9, col: 0 }));
    }

    #[test]
    fn quit() {
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn garbage() {
        assert_eq!(parse("   "), Err(ParseCommandError::Empty));
        for input in &["z9", "d9", "d", "1 2 3", "a b", "-1 2"] {
            assert_eq!(
                parse(input),
                Err(ParseCommandError::Unrecognized {
                    input: input.to_string()
                })
            );
        }
    }
}
