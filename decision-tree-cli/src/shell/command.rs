//! Shell command parsing: one line of user input -> one navigator action.

use std::str::FromStr;

use thiserror::Error;

/// One user action in the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Follow option `n` (1-based, as displayed).
    Choose(usize),
    Back,
    /// Jump to the breadcrumb with this true history index.
    Jump(usize),
    Reset,
    Help,
    Quit,
}

/// Error when a line of input is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("expected a number, got '{0}'")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(ParseCommandError::Empty);
        };
        if let Ok(n) = head.parse::<usize>() {
            return Ok(Command::Choose(n));
        }
        match head.to_ascii_lowercase().as_str() {
            "b" | "back" => Ok(Command::Back),
            "r" | "reset" | "restart" => Ok(Command::Reset),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "j" | "jump" => {
                let arg = parts.next().unwrap_or_default();
                arg.parse::<usize>()
                    .map(Command::Jump)
                    .map_err(|_| ParseCommandError::InvalidNumber(arg.to_string()))
            }
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
