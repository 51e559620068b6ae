//! Strategy port - abstraction over computer move selection

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A move-selection policy.
///
/// Every strategy maps a board and the mark to move onto a cell index. The
/// controller derives `player` from occupancy, so implementations may rely on
/// `player == board.next_player()`.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{ports::Strategy, strategies::RandomStrategy, tictactoe::Board};
///
/// let mut easy = RandomStrategy::with_seed(7);
/// let board = Board::new();
/// let cell = easy.choose_move(&board, board.next_player()).unwrap();
/// assert!(board.empty_cells().contains(&cell));
/// ```
pub trait Strategy: Send {
    /// Choose the cell (0-8) to mark for `player`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no empty cell.
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Difficulty label shown to the user (`easy`, `medium`, `hard`).
    fn name(&self) -> &str;

    /// Reseed the strategy's random number generator.
    ///
    /// Deterministic strategies can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
