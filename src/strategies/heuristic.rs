//! Single-ply tactical player

use tracing::trace;

use super::random::RandomStrategy;
use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, LineAnalyzer, Player},
};

/// Heuristic policy ("medium")
///
/// 1. Complete a line holding two of its own marks
/// 2. Otherwise block a line holding two of the opponent's marks
/// 3. Otherwise play randomly
///
/// Lines are scanned rows, columns, diagonals; the first hit wins.
pub struct HeuristicStrategy {
    fallback: RandomStrategy,
}

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self {
            fallback: RandomStrategy::new(),
        }
    }

    /// Create a heuristic strategy whose random fallback uses `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: RandomStrategy::with_seed(seed),
        }
    }

    /// The winning or blocking cell for `player`, if one exists
    pub fn tactical_move(board: &Board, player: Player) -> Option<usize> {
        if let Some(cell) = LineAnalyzer::completing_cell(board, player) {
            trace!(cell, ?player, "completing own line");
            return Some(cell);
        }
        let blocking = LineAnalyzer::completing_cell(board, player.opponent());
        if let Some(cell) = blocking {
            trace!(cell, ?player, "blocking opponent line");
        }
        blocking
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        match Self::tactical_move(board, player) {
            Some(cell) => Ok(cell),
            None => self.fallback.pick_empty(board),
        }
    }

    fn name(&self) -> &str {
        "medium"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.fallback.set_rng_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_own_line() {
        // X X .
        // O O .
        // . . .
        let b = board("XX_OO____");
        let mut strategy = HeuristicStrategy::with_seed(0);
        assert_eq!(strategy.choose_move(&b, Player::X).unwrap(), 2);
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O's turn: O can win at 5, X threatens at 2
        let b = board("XX_OO_X__");
        let mut strategy = HeuristicStrategy::with_seed(0);
        assert_eq!(strategy.choose_move(&b, Player::O).unwrap(), 5);
    }

    #[test]
    fn test_blocks_opponent_line() {
        // X O .
        // . O .
        // . . X   -> O holds column 1, X blocks at 7
        let b = board("XO__O___X");
        assert_eq!(HeuristicStrategy::tactical_move(&b, Player::X), Some(7));
    }

    #[test]
    fn test_no_tactical_move_on_blocked_lines() {
        // The O diagonal is already cut by X at 0
        let b = board("X___O___O");
        assert_eq!(HeuristicStrategy::tactical_move(&b, Player::X), None);

        let b = board("X___OX___");
        assert_eq!(HeuristicStrategy::tactical_move(&b, Player::O), None);
    }

    #[test]
    fn test_block_picks_first_line_in_order() {
        // O O .
        // O X .
        // . . X   -> O threatens row 0 (cell 2) and column 0 (cell 6)
        let b = board("OO_OX___X");
        assert_eq!(HeuristicStrategy::tactical_move(&b, Player::X), Some(2));
    }

    #[test]
    fn test_falls_back_to_random() {
        let b = board("X___O____");
        let mut strategy = HeuristicStrategy::with_seed(5);
        let cell = strategy.choose_move(&b, Player::X).unwrap();
        assert!(b.empty_cells().contains(&cell));
    }

    #[test]
    fn test_scenario_xxo_o() {
        // X X O
        // . O .
        // . . .   top row is already blocked; O threatens the anti-diagonal
        let b = board("XXO_O____");
        assert_eq!(b.next_player(), Player::X);
        let mut strategy = HeuristicStrategy::with_seed(0);
        assert_eq!(strategy.choose_move(&b, Player::X).unwrap(), 6);
    }
}
