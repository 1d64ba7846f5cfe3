//! Row and column keywords players type to address a cell.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A board row, named the way players type it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Row {
    /// Row 0.
    Top,
    /// Row 1.
    Middle,
    /// Row 2.
    Bottom,
}

impl Row {
    /// Grid index of this row (0-2).
    pub fn index(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Middle => 1,
            Row::Bottom => 2,
        }
    }
}

/// A board column, named the way players type it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Column {
    /// Column 0.
    Left,
    /// Column 1.
    Middle,
    /// Column 2.
    Right,
}

impl Column {
    /// Grid index of this column (0-2).
    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Middle => 1,
            Column::Right => 2,
        }
    }
}

/// A cell address built from keywords, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Row keyword.
    pub row: Row,
    /// Column keyword.
    pub column: Column,
}

impl Coordinates {
    /// Creates coordinates from a row and column.
    pub fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Returns the `(row, column)` grid indices.
    pub fn indices(self) -> (usize, usize) {
        (self.row.index(), self.column.index())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row, self.column)
    }
}
