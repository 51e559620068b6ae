//! Mover kinds and session setup

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app::EngineConfig,
    ports::Strategy,
    strategies::{HeuristicStrategy, MinimaxStrategy, RandomStrategy, SharedSearchCache},
    tictactoe::{Board, Player},
};

/// Who (or what) picks the moves for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoverKind {
    Human,
    Random,
    Heuristic,
    Minimax,
}

impl MoverKind {
    /// Command token for this kind: `user`, `easy`, `medium` or `hard`
    pub fn token(self) -> &'static str {
        match self {
            MoverKind::Human => "user",
            MoverKind::Random => "easy",
            MoverKind::Heuristic => "medium",
            MoverKind::Minimax => "hard",
        }
    }

    pub fn is_human(self) -> bool {
        self == MoverKind::Human
    }

    /// Build the strategy playing `player`, or `None` for a human.
    ///
    /// Minimax players receive `cache`, so both sides of a session share it.
    pub fn into_strategy(
        self,
        config: &EngineConfig,
        player: Player,
        cache: &SharedSearchCache,
    ) -> Option<Box<dyn Strategy>> {
        let seed = config.seed_for(player);
        match self {
            MoverKind::Human => None,
            MoverKind::Random => Some(Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            })),
            MoverKind::Heuristic => Some(Box::new(match seed {
                Some(seed) => HeuristicStrategy::with_seed(seed),
                None => HeuristicStrategy::new(),
            })),
            MoverKind::Minimax => {
                let strategy = MinimaxStrategy::with_cache(SharedSearchCache::clone(cache))
                    .with_tie_break(config.tie_break);
                Some(Box::new(match seed {
                    Some(seed) => strategy.with_seed(seed),
                    None => strategy,
                }))
            }
        }
    }
}

impl FromStr for MoverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MoverKind::Human),
            "easy" => Ok(MoverKind::Random),
            "medium" => Ok(MoverKind::Heuristic),
            "hard" => Ok(MoverKind::Minimax),
            _ => Err(Error::UnknownMover {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Everything needed to start a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSetup {
    /// Mover for X, who opens
    pub first: MoverKind,
    /// Mover for O
    pub second: MoverKind,
    /// Pre-filled board; empty when `None`
    pub board: Option<Board>,
}

impl SessionSetup {
    pub fn new(first: MoverKind, second: MoverKind) -> Self {
        Self {
            first,
            second,
            board: None,
        }
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// The mover configured for `player`
    pub fn mover_for(&self, player: Player) -> MoverKind {
        match player {
            Player::X => self.first,
            Player::O => self.second,
        }
    }
}
