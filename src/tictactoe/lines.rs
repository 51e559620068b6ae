//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Cell, Player};

pub const ROWS: [[usize; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
pub const COLUMNS: [[usize; 3]; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
pub const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Winning line indices on the 3x3 board, in enumeration order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        board.lines().any(|line| line.owner() == Some(player))
    }

    /// The empty cell of the first line holding two of `player`'s marks and
    /// one empty cell
    pub fn completing_cell(board: &Board, player: Player) -> Option<usize> {
        let target = player.to_cell();
        board
            .lines()
            .find(|line| line.count(target) == 2 && line.count(Cell::Empty) == 1)
            .and_then(|line| line.first_empty())
    }
}
