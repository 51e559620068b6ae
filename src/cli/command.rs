//! `start <side1> <side2>` and `exit`

use std::str::FromStr;

use thiserror::Error;

use crate::session::{MoverKind, SessionSetup};

/// A parsed command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a game: `first` plays X, `second` plays O
    Start { first: MoverKind, second: MoverKind },
    Exit,
}

/// Any malformed command. The user only ever sees the generic message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Bad parameters")]
pub struct CommandError {
    pub line: String,
}

impl Command {
    /// Session setup for a `start` command
    pub fn setup(&self) -> Option<SessionSetup> {
        match *self {
            Command::Start { first, second } => Some(SessionSetup::new(first, second)),
            Command::Exit => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let bad = || CommandError {
            line: line.to_string(),
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["exit", ..] => Ok(Command::Exit),
            ["start", first, second] => Ok(Command::Start {
                first: first.parse().map_err(|_| bad())?,
                second: second.parse().map_err(|_| bad())?,
            }),
            _ => Err(bad()),
        }
    }
}
