//! Human coordinate input
//!
//! Coordinates are `x y`, 1-indexed, with `x` the column from the left and
//! `y` the row counted from the bottom.

use thiserror::Error;

use crate::tictactoe::Board;

/// Why a coordinate line was rejected. The messages are shown verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("You should enter two numbers!")]
    Empty,
    #[error("You should enter numbers!")]
    NotNumbers,
    #[error("Coordinates should be from 1 to 3!")]
    OutOfRange,
    #[error("This cell is occupied! Choose another one!")]
    Occupied,
}

/// A validated pair of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    /// Column, 1 = leftmost
    pub x: usize,
    /// Row, 1 = bottom
    pub y: usize,
}

impl Coordinates {
    /// Parse and range-check one input line (without its line terminator).
    pub fn parse(line: &str) -> Result<Self, CoordinateError> {
        if line.is_empty() {
            return Err(CoordinateError::Empty);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [x, y] = tokens.as_slice() else {
            return Err(CoordinateError::NotNumbers);
        };
        let x = parse_number(x)?;
        let y = parse_number(y)?;

        if !(1..=3).contains(&x) || !(1..=3).contains(&y) {
            return Err(CoordinateError::OutOfRange);
        }
        Ok(Coordinates { x, y })
    }

    /// Board index: `(3 - y) * 3 + (x - 1)`
    pub fn to_index(self) -> usize {
        (3 - self.y) * 3 + (self.x - 1)
    }
}

fn parse_number(token: &str) -> Result<usize, CoordinateError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoordinateError::NotNumbers);
    }
    // All digits but too large for usize is still just out of range
    token.parse().map_err(|_| CoordinateError::OutOfRange)
}

/// Parse a coordinate line into a free board index.
pub fn parse_move(line: &str, board: &Board) -> Result<usize, CoordinateError> {
    let index = Coordinates::parse(line)?.to_index();
    if board.is_empty(index) {
        Ok(index)
    } else {
        Err(CoordinateError::Occupied)
    }
}
