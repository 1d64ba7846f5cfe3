//! The 3x3 grid and placement rules.

use crate::rules;
use crate::types::{Cell, Marker};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// Row-major cell storage.
pub type Grid = [[Cell; SIZE]; SIZE];

/// Horizontal rule drawn between rows.
const ROW_SEPARATOR: &str = "------------";

/// Errors returned by [`Board::place_marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Row or column is outside 0-2.
    #[display("Invalid row/column ({row}, {column})")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// The cell already holds a marker.
    #[display("Cell ({row}, {column}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board seeded with an existing grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cell at `(row, column)`, or `None` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.grid.get(row)?.get(column).copied()
    }

    /// Checks if the cell at `(row, column)` is empty.
    ///
    /// Out-of-range coordinates are never empty.
    pub fn space_empty(&self, row: usize, column: usize) -> bool {
        self.cell(row, column).is_some_and(Cell::is_empty)
    }

    /// Places `marker` at `(row, column)`.
    ///
    /// Bounds are checked before occupancy, so an out-of-range request
    /// always reports [`PlaceError::InvalidPosition`]. The board is left
    /// untouched on error.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::InvalidPosition`] if row or column exceeds 2.
    /// - [`PlaceError::CellOccupied`] if the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn place_marker(
        &mut self,
        marker: Marker,
        row: usize,
        column: usize,
    ) -> Result<Marker, PlaceError> {
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(PlaceError::InvalidPosition { row, column })?;

        if !cell.is_empty() {
            return Err(PlaceError::CellOccupied { row, column });
        }

        *cell = Cell::Marked(marker);
        debug!(%marker, row, column, "Marker placed");
        Ok(marker)
    }

    /// Returns true if any row, column or diagonal holds three identical
    /// markers.
    #[instrument(skip(self))]
    pub fn winner(&self) -> bool {
        rules::check_winner(self).is_some()
    }

    /// Returns the marker owning the first winning line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// Returns true if the board is full and nobody has won.
    #[instrument(skip(self))]
    pub fn tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// Returns true if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Writes the grid to `writer`, followed by a newline.
    pub fn display_grid<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                write!(f, "\n{ROW_SEPARATOR}\n")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str("|")?;
                }
                write!(f, " {cell} ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Marked(Marker::X);
    const O: Cell = Cell::Marked(Marker::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_place_on_empty_returns_marker() {
        let mut board = Board::new();
        assert_eq!(board.place_marker(Marker::X, 0, 0), Ok(Marker::X));
        assert_eq!(board.cell(0, 0), Some(X));
        let others = board.grid().iter().flatten().filter(|c| !c.is_empty()).count();
        assert_eq!(others, 1);
    }

    #[test]
    fn test_place_on_occupied_is_rejected() {
        let grid = [[O, E, X], [O, X, E], [E, E, E]];
        let mut board = Board::from_grid(grid);
        assert_eq!(
            board.place_marker(Marker::X, 0, 0),
            Err(PlaceError::CellOccupied { row: 0, column: 0 })
        );
        assert_eq!(board.grid(), &grid);
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.place_marker(Marker::X, 3, 5),
            Err(PlaceError::InvalidPosition { row: 3, column: 5 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        let mut board = Board::from_grid([[X; 3]; 3]);
        assert_eq!(
            board.place_marker(Marker::O, 0, 3),
            Err(PlaceError::InvalidPosition { row: 0, column: 3 })
        );
    }

    #[test]
    fn test_space_empty() {
        let board = Board::from_grid([[X, E, E], [E, E, E], [E, E, O]]);
        assert!(!board.space_empty(0, 0));
        assert!(board.space_empty(0, 1));
        assert!(!board.space_empty(2, 2));
        assert!(!board.space_empty(5, 5));
    }

    #[test]
    fn test_display_empty_grid() {
        let expected = "   |   |   \n------------\n   |   |   \n------------\n   |   |   ";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_display_grid_writes_markers() {
        let board = Board::from_grid([[X, O, E], [E, X, E], [E, E, O]]);
        let mut out = Vec::new();
        board.display_grid(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            " X | O |   \n------------\n   | X |   \n------------\n   |   | O \n"
        );
    }
}
