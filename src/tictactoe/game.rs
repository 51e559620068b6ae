//! Terminal-state evaluation

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A single applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// State of a board: still being played, won, or drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Score of a finished game from `perspective`: +1 win, -1 loss, 0 draw
    pub fn score_for(self, perspective: Player) -> Option<i32> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Draw => Some(0),
            GameStatus::Won(winner) if winner == perspective => Some(1),
            GameStatus::Won(_) => Some(-1),
        }
    }
}

/// Evaluate a board.
///
/// The first uniform non-empty line wins, scanning rows, then columns, then
/// diagonals. Without one the board is a draw when full and ongoing otherwise.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = board.lines().find_map(|line| line.owner()) {
        return GameStatus::Won(winner);
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

impl Board {
    /// Shorthand for [`evaluate`]
    pub fn status(&self) -> GameStatus {
        evaluate(self)
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), GameStatus::Ongoing);
    }

    #[test]
    fn test_win_detection() {
        assert_eq!(evaluate(&board("XXXOO____")), GameStatus::Won(Player::X));
        assert_eq!(evaluate(&board("XOXXO__O_")), GameStatus::Won(Player::O));
        assert_eq!(evaluate(&board("O_XOX_X__")), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        assert_eq!(evaluate(&board("XXXOOXXOO")), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let b = board("XOXXOOOXX");
        assert!(b.is_full());
        assert_eq!(evaluate(&b), GameStatus::Draw);
        assert!(b.is_terminal());
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let b = board("XO_XO____");
        assert_eq!(b.status(), GameStatus::Ongoing);
        assert_eq!(b.count(Cell::Empty), 5);
    }

    #[test]
    fn test_score_for() {
        assert_eq!(GameStatus::Won(Player::X).score_for(Player::X), Some(1));
        assert_eq!(GameStatus::Won(Player::X).score_for(Player::O), Some(-1));
        assert_eq!(GameStatus::Draw.score_for(Player::O), Some(0));
        assert_eq!(GameStatus::Ongoing.score_for(Player::X), None);
    }
}
