//! First-class move types.
//!
//! A move records who placed a marker and where. Moves are kept in the
//! game's history in the order they were played.

use serde::{Deserialize, Serialize};
use tictac_engine::{Coordinates, Marker, PlaceError};

/// A marker placed at a keyword-addressed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub coordinates: Coordinates,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coordinates)
    }
}

/// Reasons a move can be refused.
///
/// Players see the same retry message for every kind; the distinction
/// only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Wrong number of words, or a word outside the row/column vocabulary.
    #[display("Malformed input: {:?}", _0)]
    MalformedInput(String),

    /// The addressed cell already holds a marker.
    #[display("Cell ({row}, {column}) is already occupied")]
    CellOccupied {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
    },

    /// Coordinates outside the grid.
    #[display("Invalid position ({row}, {column})")]
    InvalidPosition {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
    },

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::InvalidPosition { row, column } => Self::InvalidPosition { row, column },
            PlaceError::CellOccupied { row, column } => Self::CellOccupied { row, column },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::{Column, Row};

    #[test]
    fn test_move_display() {
        let mv = Move::new(Marker::O, Coordinates::new(Row::Middle, Column::Right));
        assert_eq!(mv.to_string(), "O -> middle right");
    }

    #[test]
    fn test_place_errors_map_to_move_errors() {
        let err: MoveError = PlaceError::CellOccupied { row: 1, column: 2 }.into();
        assert_eq!(err, MoveError::CellOccupied { row: 1, column: 2 });
        let err: MoveError = PlaceError::InvalidPosition { row: 4, column: 0 }.into();
        assert_eq!(err, MoveError::InvalidPosition { row: 4, column: 0 });
    }
}
