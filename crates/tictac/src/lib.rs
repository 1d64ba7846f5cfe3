//! Tictac - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Game**: turn sequencing over a [`tictac_engine::Board`]
//! - **Console**: line-based input/output boundary the game talks through
//! - **Session**: replay loop that runs one fresh game per match
//! - **Settings**: TOML-backed preferences
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictac::{Game, GameStatus, Marker, StdConsole};
//!
//! # fn main() -> Result<(), tictac::ConsoleError> {
//! let moves = "top left\nmiddle left\ntop middle\nmiddle middle\ntop right\n";
//! let mut console = StdConsole::new(Cursor::new(moves), Vec::new());
//! let status = Game::new().play(&mut console)?;
//! assert_eq!(status, GameStatus::Won(Marker::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod console;
mod game;
mod session;
mod settings;

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Input/output boundary
pub use console::{Console, ConsoleError, ConsoleErrorKind, StdConsole};

// Crate-level exports - Game engine
pub use game::{Game, GameStatus, INVALID_MOVE_MESSAGE};

// Crate-level exports - Replay session
pub use session::{FAREWELL, REPLAY_PROMPT, SessionSummary, WELCOME, run_session, wants_replay};

// Crate-level exports - Configuration
pub use settings::{ConfigError, Settings};

// Re-exported board types so callers need a single dependency
pub use tictac_engine::{Board, Cell, Column, Coordinates, Marker, PlaceError, Row};
