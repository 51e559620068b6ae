//! Board representation, line views and the turn rule

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{COLUMNS, DIAGONALS, ROWS, WINNING_LINES};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// Border line printed above and below the rendered grid
pub const GRID_BORDER: &str = "---------";

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used in the canonical string form
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a cell character. Lowercase marks and a space are accepted too.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            other => other.to_char(),
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A borrowed view of three cells forming a row, column or diagonal
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    board: &'a Board,
    indices: [usize; 3],
}

impl<'a> LineView<'a> {
    /// Board indices covered by this line
    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    /// References to the cells of this line, in index order
    pub fn cells(&self) -> [&'a Cell; 3] {
        let board = self.board;
        self.indices.map(|idx| &board.cells[idx])
    }

    /// Number of cells in the line holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().iter().filter(|&&&c| c == cell).count()
    }

    /// The player holding all three cells, if any
    pub fn owner(&self) -> Option<Player> {
        let [a, b, c] = self.cells();
        if a == b && b == c { a.player() } else { None }
    }

    /// First empty cell of the line, as a board index
    pub fn first_empty(&self) -> Option<usize> {
        self.indices
            .iter()
            .copied()
            .find(|&idx| self.board.cells[idx] == Cell::Empty)
    }
}

/// A 3x3 board stored row-major, index = row * 3 + column, row 0 on top.
///
/// The board carries no turn field; whose turn it is follows from occupancy,
/// see [`Board::next_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; BOARD_CELLS])
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Parse the canonical 9-character form (`X`, `O`, `_`).
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 characters or any
    /// character is not a cell.
    pub fn from_canonical(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Self::from_cells(cells))
    }

    /// Canonical string used as the search cache key
    pub fn to_canonical_string(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn cell_at(&self, index: usize) -> Result<Cell, crate::Error> {
        self.cells
            .get(index)
            .copied()
            .ok_or(crate::Error::InvalidPosition { position: index })
    }

    /// Overwrite the cell at position (0-8)
    pub fn set_cell(&mut self, index: usize, cell: Cell) -> Result<(), crate::Error> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(crate::Error::InvalidPosition { position: index })?;
        *slot = cell;
        Ok(())
    }

    /// Check if a position is empty. Out of range positions are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&Cell::Empty)
    }

    pub fn rows(&self) -> [LineView<'_>; 3] {
        ROWS.map(|indices| self.line(indices))
    }

    pub fn columns(&self) -> [LineView<'_>; 3] {
        COLUMNS.map(|indices| self.line(indices))
    }

    pub fn diagonals(&self) -> [LineView<'_>; 2] {
        DIAGONALS.map(|indices| self.line(indices))
    }

    /// All 8 lines: rows, then columns, then diagonals
    pub fn lines(&self) -> impl Iterator<Item = LineView<'_>> + '_ {
        WINNING_LINES.iter().map(move |&indices| self.line(indices))
    }

    fn line(&self, indices: [usize; 3]) -> LineView<'_> {
        LineView {
            board: self,
            indices,
        }
    }

    /// Get all empty positions in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of placed marks
    pub fn occupied_count(&self) -> usize {
        BOARD_CELLS - self.count(Cell::Empty)
    }

    /// The player whose turn it is: whoever has fewer marks, X on a tie.
    ///
    /// Assumes strictly alternating play; nothing checks that here.
    pub fn next_player(&self) -> Player {
        if self.count(Cell::X) <= self.count(Cell::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Place the next player's mark and return the new board
    #[must_use = "with_move returns a new board; this board is unchanged"]
    pub fn with_move(&self, index: usize) -> Result<Board, crate::Error> {
        if !self.is_empty(index) {
            self.cell_at(index)?;
            return Err(crate::Error::CellOccupied { position: index });
        }
        let mut next = *self;
        next.cells[index] = self.next_player().to_cell();
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_canonical(s)
    }
}

/// Bordered grid, top row first, empty cells as spaces
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{GRID_BORDER}")?;
        for row in self.rows() {
            let [a, b, c] = row.cells();
            writeln!(f, "| {} {} {} |", a.glyph(), b.glyph(), c.glyph())?;
        }
        write!(f, "{GRID_BORDER}")
    }
}
