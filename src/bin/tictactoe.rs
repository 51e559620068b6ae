//! Tic-Tac-Toe console: play against easy, medium and hard computer players

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_ai::{app::EngineConfig, cli::Repl, strategies::TieBreak};
use tracing::info;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Play Tic-Tac-Toe against computer players", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible computer play
    #[arg(long)]
    seed: Option<u64>,

    /// How the hard player picks among equally good moves
    #[arg(long, value_enum)]
    tie_break: Option<TieBreak>,

    /// Canonical board every game starts from (9 chars of X, O, _)
    #[arg(long)]
    board: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_toml_file(path)?,
            None => EngineConfig::new(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(tie_break) = self.tie_break {
            config = config.with_tie_break(tie_break);
        }
        if let Some(board) = self.board {
            config = config.with_start_board(board);
        }
        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    init_tracing(&config.log_level);

    if let Some(board) = config.start_board().context("invalid start board")? {
        board
            .validate_for_setup()
            .with_context(|| format!("start board {} cannot begin a game", board.to_canonical_string()))?;
    }
    info!(seed = ?config.seed, tie_break = ?config.tie_break, "engine configured");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(stdin.lock(), stdout.lock(), config).run()?;
    Ok(())
}
