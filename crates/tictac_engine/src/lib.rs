//! Tictac engine - pure tic-tac-toe board logic.
//!
//! This crate owns the 3x3 grid and every rule that can be decided from
//! the grid alone: placement validation, win detection and tie detection.
//! It has no knowledge of turns, players or input handling.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Board, Marker};
//!
//! let mut board = Board::new();
//! board.place_marker(Marker::X, 0, 0).unwrap();
//! board.place_marker(Marker::X, 1, 1).unwrap();
//! board.place_marker(Marker::X, 2, 2).unwrap();
//! assert!(board.winner());
//! assert!(!board.tie());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod position;
pub mod rules;
mod types;

pub use board::{Board, Grid, PlaceError, SIZE};
pub use position::{Column, Coordinates, Row};
pub use types::{Cell, Marker};
