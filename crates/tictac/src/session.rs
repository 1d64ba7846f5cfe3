//! Replay loop: one fresh game per match until the players stop.

use crate::console::{Console, ConsoleError};
use crate::game::{Game, GameStatus};
use crate::settings::Settings;
use derive_getters::Getters;
use serde::Serialize;
use tictac_engine::Marker;
use tracing::{debug, info, instrument};

/// Banner printed before each match.
pub const WELCOME: [&str; 3] = [
    "Welcome to Tic Tac Toe!",
    "To play, enter the desired row position, followed by a space, and the desired column position.",
    "Examples of proper input [row] [column]: \"top right\", \"middle middle\", or \"bottom left\".",
];

/// Asked after each match.
pub const REPLAY_PROMPT: &str = "If you want to play again, enter \"y\"!";

/// Printed when the session ends.
pub const FAREWELL: &str = "Thanks for playing.";

/// Tally of finished matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SessionSummary {
    /// Matches played to a result.
    matches: u32,
    /// Matches won by player 1.
    x_wins: u32,
    /// Matches won by player 2.
    o_wins: u32,
    /// Matches tied.
    ties: u32,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Marker::X) => self.x_wins += 1,
            GameStatus::Won(Marker::O) => self.o_wins += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::InProgress => return,
        }
        self.matches += 1;
    }
}

/// Only a literal `y` (either case) replays; surrounding spaces do not match.
pub fn wants_replay(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// Plays matches until the players decline a replay or input runs out.
///
/// Each match gets a brand new [`Game`]; nothing carries over except the
/// tally returned at the end.
#[instrument(skip_all, fields(show_banner = *settings.show_banner()))]
pub fn run_session<C: Console + ?Sized>(
    console: &mut C,
    settings: &Settings,
) -> Result<SessionSummary, ConsoleError> {
    let mut summary = SessionSummary::default();

    loop {
        if *settings.show_banner() {
            for line in WELCOME {
                console.write_line(line)?;
            }
        }

        match Game::new().play(console) {
            Ok(status) => summary.record(status),
            Err(err) if err.is_input_closed() => {
                info!("Input closed mid-match, ending session");
                break;
            }
            Err(err) => return Err(err),
        }

        console.write_line(REPLAY_PROMPT)?;
        let answer = match console.read_line() {
            Ok(answer) => answer,
            Err(err) if err.is_input_closed() => break,
            Err(err) => return Err(err),
        };

        let again = wants_replay(&answer);
        debug!(%answer, again, "Replay answer");
        if !again {
            break;
        }
    }

    console.write_line(FAREWELL)?;
    info!(?summary, "Session finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_y_replays() {
        assert!(wants_replay("y"));
        assert!(wants_replay("Y"));
        assert!(!wants_replay(" y"));
        assert!(!wants_replay("y "));
        assert!(!wants_replay("yes"));
        assert!(!wants_replay(""));
        assert!(!wants_replay("n"));
    }

    #[test]
    fn test_summary_counts_outcomes() {
        let mut summary = SessionSummary::default();
        summary.record(GameStatus::Won(Marker::X));
        summary.record(GameStatus::Tied);
        summary.record(GameStatus::Won(Marker::O));
        summary.record(GameStatus::Won(Marker::X));
        summary.record(GameStatus::InProgress);
        assert_eq!(*summary.matches(), 4);
        assert_eq!(*summary.x_wins(), 2);
        assert_eq!(*summary.o_wins(), 1);
        assert_eq!(*summary.ties(), 1);
    }
}
