//! Tie detection logic.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.grid().iter().flatten().all(|cell| !cell.is_empty())
}

/// A tie is a full board with no winning line.
///
/// The win check always runs; a full board that contains a line is a win,
/// not a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
