//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use tictactoe_ai::tictactoe::{Board, GameStatus};

/// Every board reachable from the empty board by legal play, terminal ones included.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for cell in board.empty_cells() {
            stack.push(board.with_move(cell).expect("empty cell accepts a move"));
        }
    }
    boards
}

/// Plain negamax reference: the game value for the player to move.
pub struct Solver {
    memo: HashMap<Board, i32>,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            memo: HashMap::new(),
        }
    }

    pub fn value(&mut self, board: &Board) -> i32 {
        if let Some(&value) = self.memo.get(board) {
            return value;
        }
        let value = match board.status() {
            GameStatus::Won(winner) if winner == board.next_player() => 1,
            GameStatus::Won(_) => -1,
            GameStatus::Draw => 0,
            GameStatus::Ongoing => board
                .empty_cells()
                .into_iter()
                .map(|cell| -self.value(&board.with_move(cell).expect("empty cell")))
                .max()
                .expect("ongoing board has an empty cell"),
        };
        self.memo.insert(*board, value);
        value
    }

    /// Value of playing `cell` for the player to move
    pub fn move_value(&mut self, board: &Board, cell: usize) -> i32 {
        -self.value(&board.with_move(cell).expect("empty cell"))
    }
}

pub fn board(s: &str) -> Board {
    s.parse().expect("valid canonical board")
}
