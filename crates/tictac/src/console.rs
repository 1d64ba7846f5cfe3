//! Line-based input/output boundary.
//!
//! The game never touches stdin or stdout directly. It reads and writes
//! whole lines through a [`Console`], so the turn loop can be driven from
//! an in-memory script in tests.

use derive_more::{Display, Error};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::{debug, instrument, trace};

/// Something that can show lines to the players and read their replies.
pub trait Console {
    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Blocks until one line of input arrives.
    ///
    /// The trailing newline is stripped. Returns an error of kind
    /// [`ConsoleErrorKind::InputClosed`] once input is exhausted.
    fn read_line(&mut self) -> Result<String, ConsoleError>;
}

/// Console over any buffered reader and writer.
#[derive(Debug, derive_new::new)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[instrument]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R, W> StdConsole<R, W> {
    /// Returns everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            debug!("Input stream closed");
            return Err(ConsoleError::new(ConsoleErrorKind::InputClosed));
        }
        let line = buf.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Line read");
        Ok(line)
    }
}

/// What went wrong at the console boundary.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// Reading or writing failed.
    #[display("I/O failure: {}", _0)]
    Io(String),
    /// No more input will arrive.
    #[display("input closed")]
    InputClosed,
}

/// Console error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// Error category.
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the error means input has run out.
    pub fn is_input_closed(&self) -> bool {
        self.kind == ConsoleErrorKind::InputClosed
    }
}

impl From<io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}
