//! Turn sequencing for a single match.

use crate::action::{Move, MoveError};
use crate::console::{Console, ConsoleError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tictac_engine::{Board, Column, Coordinates, Marker, Row};
use tracing::{debug, info, instrument, warn};

/// Shown whenever a move is refused, whatever the reason.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move/input. Try again.";

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The given marker completed a line.
    Won(Marker),
    /// Board filled with no winner.
    Tied,
}

impl GameStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One match of tic-tac-toe between player 1 (X) and player 2 (O).
///
/// The player number is derived from the current marker, so the two can
/// never disagree.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    marker: Marker,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Creates a game starting from an existing board, player 1 to move.
    ///
    /// A board that is already won or full starts in that terminal state.
    #[instrument(skip(board))]
    pub fn with_board(board: Board) -> Self {
        let mut game = Self {
            board,
            marker: Marker::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        };
        game.check_outcome();
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker of the player to move.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the number (1 or 2) of the player to move.
    pub fn player_number(&self) -> u8 {
        self.marker.player_number()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.marker))]
    pub fn toggle_turn(&mut self) {
        self.marker = self.marker.opponent();
    }

    /// Checks that `tokens` name a row keyword followed by a column keyword.
    ///
    /// Tokens are expected to be lowercased already.
    pub fn validate_move(tokens: &[&str]) -> bool {
        parse_tokens(tokens).is_ok()
    }

    /// Parses a raw input line into coordinates of an empty cell.
    ///
    /// # Errors
    ///
    /// - [`MoveError::MalformedInput`] if the line is not exactly a row and
    ///   a column keyword.
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn parse_move(&self, line: &str) -> Result<Coordinates, MoveError> {
        let lowered = line.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let coordinates = parse_tokens(&tokens)?;

        let (row, column) = coordinates.indices();
        if !self.board.space_empty(row, column) {
            return Err(MoveError::CellOccupied { row, column });
        }
        Ok(coordinates)
    }

    /// Prompts the current player until they name an empty cell.
    ///
    /// Refused input is answered with [`INVALID_MOVE_MESSAGE`] and a fresh
    /// prompt; only console failures end the loop early.
    #[instrument(skip(self, console), fields(player = self.player_number()))]
    pub fn obtain_move<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> Result<Coordinates, ConsoleError> {
        loop {
            console.write_line(&self.prompt())?;
            let line = console.read_line()?;
            match self.parse_move(&line) {
                Ok(coordinates) => return Ok(coordinates),
                Err(err) => {
                    warn!(%err, "Move refused");
                    console.write_line(INVALID_MOVE_MESSAGE)?;
                }
            }
        }
    }

    /// Places the current marker, then settles the outcome and passes the
    /// turn if the game goes on.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has been won or tied.
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker.
    #[instrument(skip(self), fields(player = self.player_number()))]
    pub fn apply_move(&mut self, coordinates: Coordinates) -> Result<Move, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (row, column) = coordinates.indices();
        let marker = self.board.place_marker(self.marker, row, column)?;
        let mv = Move::new(marker, coordinates);
        self.history.push(mv);
        debug!(%mv, "Move applied");

        if !self.check_outcome().is_terminal() {
            self.toggle_turn();
        }
        Ok(mv)
    }

    /// Re-evaluates the board. A win is checked first and credited to the
    /// owner of the line; a tie only when nobody has won.
    pub fn check_outcome(&mut self) -> GameStatus {
        if let Some(winner) = self.board.winning_marker() {
            self.status = GameStatus::Won(winner);
        } else if self.board.tie() {
            self.status = GameStatus::Tied;
        }
        self.status
    }

    /// Runs the match to completion.
    ///
    /// Shows the board before every move and once more at the end,
    /// followed by the result line.
    #[instrument(skip_all)]
    pub fn play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<GameStatus, ConsoleError> {
        info!("Match started");

        while !self.status.is_terminal() {
            console.write_line(&self.board.to_string())?;
            let coordinates = self.obtain_move(console)?;
            if let Err(err) = self.apply_move(coordinates) {
                warn!(%err, "Validated move could not be applied");
                console.write_line(INVALID_MOVE_MESSAGE)?;
            }
        }

        console.write_line(&self.board.to_string())?;
        if let Some(message) = self.result_message() {
            console.write_line(&message)?;
        }
        info!(status = ?self.status, moves = self.history.len(), "Match finished");
        Ok(self.status)
    }

    fn prompt(&self) -> String {
        format!("Player {} ({}), your move:", self.player_number(), self.marker)
    }

    /// Result line for a finished game; `None` while still in progress.
    fn result_message(&self) -> Option<String> {
        match self.status {
            GameStatus::Won(marker) => Some(format!(
                "Player {} ({}) wins!",
                marker.player_number(),
                marker
            )),
            GameStatus::Tied => Some("It's a tie! Game over.".to_string()),
            GameStatus::InProgress => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps `[row, column]` keywords to coordinates.
fn parse_tokens(tokens: &[&str]) -> Result<Coordinates, MoveError> {
    let malformed = || MoveError::MalformedInput(tokens.join(" "));

    let [row, column] = tokens else {
        return Err(malformed());
    };
    let row = Row::from_str(row).map_err(|_| malformed())?;
    let column = Column::from_str(column).map_err(|_| malformed())?;
    Ok(Coordinates::new(row, column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::Cell;

    const X: Cell = Cell::Marked(Marker::X);
    const O: Cell = Cell::Marked(Marker::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_validate_wrong_token_count() {
        assert!(!Game::validate_move(&[]));
        assert!(!Game::validate_move(&["top"]));
        assert!(!Game::validate_move(&["top", "left", "something"]));
    }

    #[test]
    fn test_validate_unknown_keywords() {
        assert!(!Game::validate_move(&["center", "right"]));
        assert!(!Game::validate_move(&["bottom", "center"]));
        assert!(!Game::validate_move(&["left", "top"]));
    }

    #[test]
    fn test_validate_accepts_keywords() {
        assert!(Game::validate_move(&["top", "left"]));
        assert!(Game::validate_move(&["middle", "middle"]));
        assert!(Game::validate_move(&["bottom", "right"]));
    }

    #[test]
    fn test_parse_move_is_case_and_space_insensitive() {
        let game = Game::new();
        let coords = game.parse_move("  Bottom   RIGHT ").unwrap();
        assert_eq!(coords, Coordinates::new(Row::Bottom, Column::Right));
    }

    #[test]
    fn test_parse_move_rejects_occupied_cell() {
        let game = Game::with_board(Board::from_grid([[X, E, E], [E, E, E], [E, E, E]]));
        assert_eq!(
            game.parse_move("top left"),
            Err(MoveError::CellOccupied { row: 0, column: 0 })
        );
    }

    #[test]
    fn test_parse_move_rejects_malformed() {
        let game = Game::new();
        assert!(matches!(
            game.parse_move("top"),
            Err(MoveError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_initial_turn_is_player_one() {
        let game = Game::new();
        assert_eq!(game.player_number(), 1);
        assert_eq!(game.marker(), Marker::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let mut game = Game::new();
        game.toggle_turn();
        assert_eq!((game.player_number(), game.marker()), (2, Marker::O));
        game.toggle_turn();
        assert_eq!((game.player_number(), game.marker()), (1, Marker::X));
    }

    #[test]
    fn test_apply_move_passes_turn() {
        let mut game = Game::new();
        let mv = game
            .apply_move(Coordinates::new(Row::Middle, Column::Middle))
            .unwrap();
        assert_eq!(mv.marker, Marker::X);
        assert_eq!(game.marker(), Marker::O);
        assert_eq!(game.history(), &[mv]);
    }

    #[test]
    fn test_winning_move_keeps_winner_on_turn() {
        let mut game = Game::with_board(Board::from_grid([[X, X, E], [O, O, E], [E, E, E]]));
        game.apply_move(Coordinates::new(Row::Top, Column::Right))
            .expect("Top right is empty");
        assert_eq!(game.status(), GameStatus::Won(Marker::X));
        assert_eq!(game.marker(), Marker::X);
        assert_eq!(
            game.apply_move(Coordinates::new(Row::Bottom, Column::Left)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let mut game = Game::with_board(Board::from_grid([[X, X, O], [X, O, O], [E, O, X]]));
        game.apply_move(Coordinates::new(Row::Bottom, Column::Left))
            .expect("Bottom left is empty");
        assert_eq!(game.status(), GameStatus::Won(Marker::X));
    }

    #[test]
    fn test_seeded_terminal_boards_start_finished() {
        let tied = Game::with_board(Board::from_grid([[X, X, O], [O, O, X], [X, O, X]]));
        assert_eq!(tied.status(), GameStatus::Tied);

        let won = Game::with_board(Board::from_grid([[O, O, O], [X, X, E], [X, E, E]]));
        assert_eq!(won.status(), GameStatus::Won(Marker::O));
        assert_eq!(won.marker(), Marker::X);
    }

    #[test]
    fn test_result_message_only_when_finished() {
        assert_eq!(Game::new().result_message(), None);
        let tied = Game::with_board(Board::from_grid([[X, X, O], [O, O, X], [X, O, X]]));
        assert_eq!(tied.result_message().as_deref(), Some("It's a tie! Game over."));
    }

    #[test]
    fn test_last_cell_without_line_ties() {
        let mut game = Game::with_board(Board::from_grid([[X, X, O], [O, O, X], [E, O, X]]));
        game.apply_move(Coordinates::new(Row::Bottom, Column::Left))
            .expect("Bottom left is empty");
        assert_eq!(game.status(), GameStatus::Tied);
    }
}
