//! Core domain types for the board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player places on the board.
///
/// Player 1 always plays [`Marker::X`] and moves first; player 2 plays
/// [`Marker::O`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Player 1's marker.
    #[display("X")]
    X,
    /// Player 2's marker.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Returns the number (1 or 2) of the player bound to this marker.
    pub fn player_number(self) -> u8 {
        match self {
            Marker::X => 1,
            Marker::O => 2,
        }
    }
}

/// State of a single cell.
///
/// A cell goes from `Empty` to `Marked` exactly once and never back.
/// Displays as its marker, or a blank when empty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    #[display(" ")]
    Empty,
    /// Holds a player's marker.
    #[display("{_0}")]
    Marked(Marker),
}

impl Cell {
    /// Returns true if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Marked(marker)
    }
}
