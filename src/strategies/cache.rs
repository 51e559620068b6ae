//! Perspective-tagged transposition cache for minimax search

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::tictactoe::{Board, Player};

/// Cache handle shared by the minimax players of one session
pub type SharedSearchCache = Arc<Mutex<SearchCache>>;

/// A cached minimax value and the player it was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub perspective: Player,
    pub score: i32,
}

impl CacheEntry {
    /// The score as seen by `perspective`; negated for the other player
    pub fn score_for(&self, perspective: Player) -> i32 {
        if self.perspective == perspective {
            self.score
        } else {
            -self.score
        }
    }
}

/// Minimax values keyed by canonical board string.
///
/// Entries are never invalidated; the table is bounded by the 3^9 possible
/// boards.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: HashMap<String, CacheEntry>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache ready to be shared between players
    pub fn shared() -> SharedSearchCache {
        Arc::new(Mutex::new(Self::new()))
    }

    /// The raw entry stored for `board`
    pub fn get(&self, board: &Board) -> Option<CacheEntry> {
        self.entries.get(&board.to_canonical_string()).copied()
    }

    /// The cached score for `board` from `perspective`
    pub fn score_for(&self, board: &Board, perspective: Player) -> Option<i32> {
        self.get(board).map(|entry| entry.score_for(perspective))
    }

    pub fn insert(&mut self, board: &Board, perspective: Player, score: i32) {
        self.entries.insert(
            board.to_canonical_string(),
            CacheEntry { perspective, score },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
