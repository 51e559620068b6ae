//! Engine configuration types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    strategies::TieBreak,
    tictactoe::{Board, Player},
};

/// Configuration shared by every session the engine runs.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::app::EngineConfig;
/// use tictactoe_ai::strategies::TieBreak;
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_tie_break(TieBreak::LowestIndex)
///     .with_start_board("X___O____");
/// assert!(config.start_board().unwrap().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineConfig {
    /// Random seed for reproducibility (None = seeded from entropy)
    pub seed: Option<u64>,
    /// How minimax picks among equally good moves
    pub tie_break: TieBreak,
    /// Canonical board every session starts from instead of an empty one
    pub start_board: Option<String>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl EngineConfig {
    /// Create a configuration with default values:
    /// - Seed: None (non-deterministic)
    /// - Tie break: `TieBreak::Random`
    /// - Start board: empty
    /// - Log level: `warn`
    pub fn new() -> Self {
        Self {
            seed: None,
            tie_break: TieBreak::default(),
            start_board: None,
            log_level: "warn".to_string(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_start_board(mut self, board: impl Into<String>) -> Self {
        self.start_board = Some(board.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is not valid configuration.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured start board, parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the board string is malformed.
    pub fn start_board(&self) -> Result<Option<Board>> {
        self.start_board
            .as_deref()
            .map(Board::from_canonical)
            .transpose()
    }

    /// Seed for the strategy playing `player`: X gets the seed, O the next one
    pub fn seed_for(&self, player: Player) -> Option<u64> {
        self.seed.map(|seed| match player {
            Player::X => seed,
            Player::O => seed.wrapping_add(1),
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
