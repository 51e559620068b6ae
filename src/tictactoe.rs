//! Tic-Tac-Toe board, rules and terminal evaluation

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{BOARD_CELLS, Board, Cell, GRID_BORDER, LineView, Player};
pub use game::{GameStatus, Move, evaluate};
pub use lines::{LineAnalyzer, WINNING_LINES};
