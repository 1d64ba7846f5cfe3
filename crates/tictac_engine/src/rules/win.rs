//! Win detection logic.

use crate::{Board, Cell, Marker};
use tracing::instrument;

/// The eight winning lines as `(row, column)` triples.
///
/// Ordered rows, columns, the top-left to bottom-right diagonal, then the
/// bottom-left to top-right diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns the marker owning the first complete line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|line| check_line(board, line))
}

/// A line wins when all three cells hold the same marker.
fn check_line(board: &Board, line: &[(usize, usize); 3]) -> Option<Marker> {
    let [a, b, c] = line.map(|(row, column)| board.cell(row, column).unwrap_or(Cell::Empty));
    match a {
        Cell::Marked(marker) if a == b && b == c => Some(marker),
        _ => None,
    }
}
