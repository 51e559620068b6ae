//! Application configuration.
//!
//! [`EngineConfig`] collects the knobs shared by every session: RNG seed,
//! minimax tie-breaking, an optional pre-filled start board and the log
//! level. It can be built in code or loaded from a TOML file:
//!
//! ```toml
//! seed = 42
//! tie-break = "lowest-index"
//! start-board = "X__XO_OXO"
//! log-level = "debug"
//! ```

pub mod config;

pub use config::EngineConfig;
