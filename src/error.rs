//! Error types for the tic-tac-toe engine

use std::path::PathBuf;

use thiserror::Error;

use crate::tictactoe::Player;

/// Main error type for the engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X must equal O or lead by one)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("board '{board}' is already finished")]
    BoardAlreadyTerminal { board: String },

    #[error("unknown player type '{token}' (expected user, easy, medium or hard)")]
    UnknownMover { token: String },

    #[error("no session has been started")]
    SessionNotStarted,

    #[error("a session is already in progress")]
    SessionInProgress,

    #[error("game already over")]
    GameOver,

    #[error("{player:?} is controlled by a human and needs a submitted move")]
    HumanToMove { player: Player },

    #[error("{player:?} is controlled by the computer, not a human")]
    NotHumanTurn { player: Player },

    #[error("{player:?} asked to move on a board where {expected:?} is to move")]
    OutOfTurn { player: Player, expected: Player },

    #[error("no strategy configured for {player:?}")]
    MissingStrategy { player: Player },

    #[error("search cache is unavailable: {message}")]
    CacheUnavailable { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
