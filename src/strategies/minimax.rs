//! Exhaustive minimax player with a perspective-tagged cache
//!
//! The search keeps one fixed perspective, the root mover's, all the way
//! down the tree. Leaves score +1 / 0 / -1 for that player. Odd depths
//! (the root mover's plies) take the maximum and even depths (the
//! opponent's plies) the minimum. The mover at every simulated node is
//! recomputed from occupancy, so the tree alternates without any turn state.
//!
//! Every scored child board is stored in the [`SearchCache`] tagged with the
//! root player. A later search for the other player reads the same entry
//! negated.

use clap::ValueEnum;
use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cache::{SearchCache, SharedSearchCache};
use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Player},
};

/// How to choose among equally good moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Uniformly at random
    #[default]
    Random,
    /// Lowest cell index, for reproducible play
    LowestIndex,
}

/// Minimax policy ("hard")
pub struct MinimaxStrategy {
    cache: SharedSearchCache,
    rng: StdRng,
    tie_break: TieBreak,
}

impl MinimaxStrategy {
    /// Create a minimax strategy with its own cache
    pub fn new() -> Self {
        Self::with_cache(SearchCache::shared())
    }

    /// Create a minimax strategy reading and filling `cache`
    pub fn with_cache(cache: SharedSearchCache) -> Self {
        Self {
            cache,
            rng: StdRng::seed_from_u64(random()),
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Handle to the cache this strategy fills
    pub fn cache(&self) -> SharedSearchCache {
        SharedSearchCache::clone(&self.cache)
    }

    /// Score every empty cell of `board` from `player`'s perspective.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] on a finished board,
    /// [`Error::OutOfTurn`] if `player` is not the side to move and
    /// [`Error::CacheUnavailable`] if the shared cache lock is poisoned.
    pub fn evaluate_moves(&self, board: &Board, player: Player) -> Result<Vec<(usize, i32)>> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        let expected = board.next_player();
        if player != expected {
            return Err(Error::OutOfTurn { player, expected });
        }
        let mut cache = self.cache.lock().map_err(|e| Error::CacheUnavailable {
            message: e.to_string(),
        })?;
        Self::search(&mut cache, board, player, 1)
    }

    /// Score each empty cell of `board` for `root`. `depth` is 1 at the root.
    fn search(
        cache: &mut SearchCache,
        board: &Board,
        root: Player,
        depth: u32,
    ) -> Result<Vec<(usize, i32)>> {
        let mut scored = Vec::with_capacity(board.empty_cells().len());

        for cell in board.empty_cells() {
            let candidate = board.with_move(cell)?;

            let score = match cache.score_for(&candidate, root) {
                Some(score) => score,
                None => {
                    let score = match candidate.status().score_for(root) {
                        Some(score) => score,
                        None => {
                            let children = Self::search(cache, &candidate, root, depth + 1)?;
                            Self::best_score(&children, depth + 1).ok_or(Error::NoValidMoves)?
                        }
                    };
                    cache.insert(&candidate, root, score);
                    score
                }
            };

            scored.push((cell, score));
        }

        Ok(scored)
    }

    /// Max on the root player's plies (odd depth), min on the opponent's
    fn best_score(scored: &[(usize, i32)], depth: u32) -> Option<i32> {
        let scores = scored.iter().map(|&(_, score)| score);
        if depth % 2 == 1 {
            scores.max()
        } else {
            scores.min()
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let scored = self.evaluate_moves(board, player)?;
        let best = Self::best_score(&scored, 1).ok_or(Error::NoValidMoves)?;
        let optimal: Vec<usize> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(cell, _)| cell)
            .collect();

        let cell = match self.tie_break {
            TieBreak::Random => optimal[self.rng.random_range(0..optimal.len())],
            TieBreak::LowestIndex => optimal[0],
        };

        debug!(
            ?player,
            cell,
            score = best,
            candidates = optimal.len(),
            "minimax move chosen"
        );
        Ok(cell)
    }

    fn name(&self) -> &str {
        "hard"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
