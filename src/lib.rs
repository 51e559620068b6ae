//! Tic-Tac-Toe engine with computer players of three strengths
//!
//! This crate provides:
//! - Board representation, rules and terminal evaluation
//! - Random, heuristic and exhaustive minimax players behind one trait
//! - A perspective-tagged search cache shared by minimax players
//! - A turn controller driving sessions between humans and computers
//! - A line-oriented console loop

pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod session;
pub mod strategies;
pub mod tictactoe;

pub use app::EngineConfig;
pub use error::{Error, Result};
pub use ports::Strategy;
pub use session::{MoverKind, SessionSetup, SessionState, TurnController};
pub use tictactoe::{Board, Cell, GameStatus, Player};
