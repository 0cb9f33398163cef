//! Error types for decoding wire values into engine types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseErrorKind {
    /// The board did not hold exactly nine cells.
    #[display("board must have 9 cells, got {}", _0)]
    WrongLength(usize),

    /// A cell held something other than `"X"`, `"O"` or `" "`.
    #[display("cell {} holds unknown symbol {:?}", index, symbol)]
    UnknownSymbol {
        /// Cell index (0-8).
        index: usize,
        /// The offending value.
        symbol: String,
    },
}

/// Decoding error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", kind, file, line)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ParseErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
