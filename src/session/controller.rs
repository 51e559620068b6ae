//! Turn controller: owns the live board and drives a session
//!
//! ```text
//! AwaitingSetup --start--> InProgress --win/draw--> Terminal
//!       ^                                              |
//!       +------------------ start ---------------------+
//! ```

use tracing::{debug, info, instrument};

use super::mover::{MoverKind, SessionSetup};
use crate::{
    Error, Result,
    app::EngineConfig,
    ports::Strategy,
    strategies::{SearchCache, SharedSearchCache},
    tictactoe::{Board, GameStatus, Move, Player, evaluate},
};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingSetup,
    InProgress,
    /// Absorbing until the next `start`
    Terminal(GameStatus),
}

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub applied: Move,
    pub status: GameStatus,
}

/// Drives one game at a time
///
/// # Examples
///
/// ```
/// use tictactoe_ai::app::EngineConfig;
/// use tictactoe_ai::session::{MoverKind, SessionSetup, TurnController};
/// use tictactoe_ai::tictactoe::GameStatus;
///
/// let mut controller = TurnController::new(EngineConfig::new().with_seed(3));
/// controller.start(SessionSetup::new(MoverKind::Minimax, MoverKind::Minimax))?;
/// assert_eq!(controller.play_out()?, GameStatus::Draw);
/// # Ok::<(), tictactoe_ai::Error>(())
/// ```
pub struct TurnController {
    config: EngineConfig,
    state: SessionState,
    board: Board,
    setup: Option<SessionSetup>,
    /// Indexed by player: X = 0, O = 1. `None` for human sides.
    strategies: [Option<Box<dyn Strategy>>; 2],
    cache: SharedSearchCache,
}

impl TurnController {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: SessionState::AwaitingSetup,
            board: Board::new(),
            setup: None,
            strategies: [None, None],
            cache: SearchCache::shared(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn setup(&self) -> Option<&SessionSetup> {
        self.setup.as_ref()
    }

    /// The search cache shared by this session's minimax players
    pub fn cache(&self) -> SharedSearchCache {
        SharedSearchCache::clone(&self.cache)
    }

    /// Start a new session.
    ///
    /// Allowed before the first session and after a finished one. A rejected
    /// setup leaves the controller untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionInProgress`] while a game is running and a
    /// validation error if the pre-filled board cannot start a game.
    #[instrument(skip(self), fields(first = %setup.first, second = %setup.second))]
    pub fn start(&mut self, setup: SessionSetup) -> Result<()> {
        if self.state == SessionState::InProgress {
            return Err(Error::SessionInProgress);
        }

        let board = setup.board.unwrap_or_default();
        board.validate_for_setup()?;

        let cache = SearchCache::shared();
        let strategies = [Player::X, Player::O]
            .map(|player| setup.mover_for(player).into_strategy(&self.config, player, &cache));

        self.board = board;
        self.setup = Some(setup);
        self.strategies = strategies;
        self.cache = cache;
        self.state = SessionState::InProgress;
        info!(board = %board.to_canonical_string(), "session started");
        Ok(())
    }

    /// The player to move and who controls it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotStarted`] or [`Error::GameOver`] outside a
    /// running game.
    pub fn pending_mover(&self) -> Result<(Player, MoverKind)> {
        let setup = match (self.state, self.setup.as_ref()) {
            (SessionState::InProgress, Some(setup)) => setup,
            (SessionState::Terminal(_), _) => return Err(Error::GameOver),
            _ => return Err(Error::SessionNotStarted),
        };
        let player = self.board.next_player();
        Ok((player, setup.mover_for(player)))
    }

    /// Let the computer play the pending move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HumanToMove`] if a human controls the side to move.
    pub fn advance(&mut self) -> Result<StepOutcome> {
        let (player, kind) = self.pending_mover()?;
        if kind.is_human() {
            return Err(Error::HumanToMove { player });
        }
        let strategy = self.strategies[slot(player)]
            .as_mut()
            .ok_or(Error::MissingStrategy { player })?;
        let cell = strategy.choose_move(&self.board, player)?;
        debug!(strategy = strategy.name(), ?player, cell, "computer move");
        self.apply(player, cell)
    }

    /// Apply a move chosen by a human.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOccupied`] for a taken cell (nothing changes) and
    /// [`Error::NotHumanTurn`] if the computer controls the side to move.
    pub fn submit_human_move(&mut self, index: usize) -> Result<StepOutcome> {
        let (player, kind) = self.pending_mover()?;
        if !kind.is_human() {
            return Err(Error::NotHumanTurn { player });
        }
        self.apply(player, index)
    }

    /// Advance until the game ends. Every side still to move must be a computer.
    pub fn play_out(&mut self) -> Result<GameStatus> {
        while self.state == SessionState::InProgress {
            self.advance()?;
        }
        match self.state {
            SessionState::Terminal(status) => Ok(status),
            _ => Err(Error::SessionNotStarted),
        }
    }

    fn apply(&mut self, player: Player, index: usize) -> Result<StepOutcome> {
        if !self.board.is_empty(index) {
            self.board.cell_at(index)?;
            return Err(Error::CellOccupied { position: index });
        }
        self.board.set_cell(index, player.to_cell())?;

        let status = evaluate(&self.board);
        let applied = Move {
            position: index,
            player,
        };
        debug!(?player, position = index, ?status, "move applied");

        if status.is_terminal() {
            self.state = SessionState::Terminal(status);
            info!(?status, board = %self.board.to_canonical_string(), "session finished");
        }
        Ok(StepOutcome { applied, status })
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::X => 0,
        Player::O => 1,
    }
}
