//! The 3x3 grid and its validated construction boundary.

use crate::position::Position;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// 3x3 tic-tac-toe grid.
///
/// Cells are stored in row-major order (0-8). The arity is fixed at
/// the type level: every `Grid` value has exactly 3 rows of 3 cells,
/// and every cell holds one of the three `Cell` values. Grids with
/// identical cell contents compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Grid {
    /// Creates a new empty grid, the starting state of a game.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a grid from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Creates a grid from 3 rows of 3 cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                cells[row * 3 + col] = *cell;
            }
        }
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the grid as 3 rows of 3 cells.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (index, cell) in self.cells.iter().enumerate() {
            rows[index / 3][index % 3] = *cell;
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                write!(f, "{}", symbol)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error raised when dynamic input does not have the 3x3 shape.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// The input does not have exactly 3 rows.
    #[display("Expected 3 rows, got {_0}")]
    RowCount(usize),
    /// A row does not have exactly 3 cells.
    #[display("Expected 3 cells in row {row}, got {len}")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of cells the row actually holds.
        len: usize,
    },
}

impl std::error::Error for GridError {}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    /// Validates dynamically-sized input against the fixed 3x3 shape.
    ///
    /// Nothing is truncated or padded: any row count other than 3,
    /// or any row without exactly 3 cells, is rejected.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != 3 {
            warn!(rows = rows.len(), "Rejecting grid with wrong row count");
            return Err(GridError::RowCount(rows.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (row, row_cells) in rows.iter().enumerate() {
            if row_cells.len() != 3 {
                warn!(row, len = row_cells.len(), "Rejecting grid with wrong row length");
                return Err(GridError::RowLength {
                    row,
                    len: row_cells.len(),
                });
            }
            for (col, cell) in row_cells.iter().enumerate() {
                cells[row * 3 + col] = *cell;
            }
        }

        Ok(Self { cells })
    }
}
