//! Lexer for the Lilt language.
//!
//! Lilt reads like instructions in plain English: keywords such as `set`,
//! `when`, and `repeat` carry the grammar, and blocks are delimited by
//! indentation rather than braces. The lexer turns source text into a
//! stream of [`Token`]s, synthesizing `Newline`, `Indent`, and `Dedent`
//! tokens from line structure the way indentation-sensitive languages do.
//!
//! # Usage
//!
//! ```
//! use lilt_lexer::{Lexer, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new("set count to 10\n");
//! let mut lexer = Lexer::new(&buffer);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Set);
//! assert_eq!(lexer.next_token().text_str(), Some("count"));
//! assert_eq!(lexer.next_token().kind, TokenKind::To);
//! assert_eq!(lexer.next_token().kind, TokenKind::Number);
//! assert_eq!(lexer.next_token().kind, TokenKind::Newline);
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```
//!
//! # Guarantees
//!
//! - [`Lexer::next_token`] always returns a token; after end of input it
//!   returns `Eof` indefinitely.
//! - `Indent` and `Dedent` tokens are balanced over any complete run.
//! - Lexical errors never abort the stream: the lexer records a
//!   [`LexError`], resynchronizes at the next line, and continues.
//! - [`Lexer::peek`] leaves the lexer state untouched, indentation
//!   bookkeeping included.

mod comments;
mod ident;
mod indent;
pub mod keywords;
mod lex_error;
mod lexer;
mod number;
mod string;
mod token;

pub use lilt_lexer_core::SourceBuffer;

pub use self::lex_error::{LexError, Location};
pub use self::lexer::{Lexer, MAX_PEEK_OFFSET};
pub use self::token::{Token, TokenKind, TokenText};
