//! Error records produced when the lexer enters recovery.
//!
//! Lexical errors never abort lexing. The lexer records one [`LexError`],
//! skips to the next line, and keeps producing tokens; the caller inspects
//! and clears the record between tokens if it cares.

use thiserror::Error;

/// A position in the source: 1-based line and column, derived from the
/// byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (in bytes from the last newline).
    pub column: u32,
    /// Byte offset into the source.
    pub offset: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A recorded lexical error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{location}: {message}")]
pub struct LexError {
    /// Where recovery was entered.
    pub location: Location,
    /// Human-readable description of what was rejected.
    pub message: String,
}

impl LexError {
    #[cold]
    pub(crate) fn new(location: Location, message: String) -> Self {
        Self { location, message }
    }
}

/// Why a scanner rejected its input. `Display` is the recorded message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub(crate) enum LexErrorKind {
    #[error("{what} literal exceeds {limit} characters")]
    TooManyChars { what: &'static str, limit: usize },
    #[error("{what} literal exceeds {limit} bytes")]
    TooManyBytes { what: &'static str, limit: usize },
    #[error("numeric literal has no digits")]
    EmptyNumber,
}
