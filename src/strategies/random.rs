//! Uniform random player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Player},
};

/// Random policy ("easy")
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick any empty cell with equal probability
    pub fn pick_empty(&mut self, board: &Board) -> Result<usize> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        self.pick_empty(board)
    }

    fn name(&self) -> &str {
        "easy"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
