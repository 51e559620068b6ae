//! Board validation for session setup

use super::board::{Board, Cell};

impl Board {
    /// Check that a board can start a session: X has as many marks as O or
    /// exactly one more, and no one has already won or filled the board.
    ///
    /// The side to move is derived from the counts, so an O-ahead board
    /// would hand X two moves in a row.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] or
    /// [`crate::Error::BoardAlreadyTerminal`].
    pub fn validate_for_setup(&self) -> Result<(), crate::Error> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);

        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        if self.is_terminal() {
            return Err(crate::Error::BoardAlreadyTerminal {
                board: self.to_canonical_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_valid() {
        assert!(Board::new().validate_for_setup().is_ok());
    }

    #[test]
    fn test_x_one_mark_ahead_is_valid() {
        let x_ahead: Board = "X__XO_OX_".parse().unwrap();
        assert!(x_ahead.validate_for_setup().is_ok());
        let balanced: Board = "X___O____".parse().unwrap();
        assert!(balanced.validate_for_setup().is_ok());
    }

    #[test]
    fn test_rejects_o_ahead() {
        for s in ["O________", "O_O_X____"] {
            let b: Board = s.parse().unwrap();
            assert!(
                matches!(
                    b.validate_for_setup(),
                    Err(crate::Error::InvalidPieceCounts { .. })
                ),
                "{s}"
            );
        }
    }

    #[test]
    fn test_rejects_unbalanced_counts() {
        let b: Board = "XX_______".parse().unwrap();
        assert!(matches!(
            b.validate_for_setup(),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            })
        ));
    }

    #[test]
    fn test_rejects_finished_boards() {
        let won: Board = "XXXOO____".parse().unwrap();
        assert!(matches!(
            won.validate_for_setup(),
            Err(crate::Error::BoardAlreadyTerminal { .. })
        ));
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert!(drawn.validate_for_setup().is_err());
    }
}
