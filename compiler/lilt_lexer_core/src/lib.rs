//! Low-level scanning primitives for the Lilt lexer.
//!
//! This crate is standalone: it has no `lilt_*` dependencies, so external
//! tools (syntax highlighters, formatters) can reuse the buffer and cursor
//! machinery without pulling in the lexer proper.
//!
//! Three pieces live here:
//!
//! - [`SourceBuffer`]: a sentinel-terminated, cache-line padded copy of the
//!   source text. The `0x00` sentinel lets the scanner detect EOF without
//!   bounds checks on every byte.
//! - [`Cursor`]: a `Copy` byte cursor over the buffer. Being `Copy` makes
//!   state snapshots for lookahead a plain assignment.
//! - [`TextAccumulator`]: the growable, cap-enforced text buffer shared by
//!   the number, string, and identifier scanners.

mod accum;
mod cursor;
mod source_buffer;

pub use accum::{AccumLimit, TextAccumulator};
pub use cursor::Cursor;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
