//! Numeric literal scanning.
//!
//! Two variants share the grammar: digits, at most one decimal point, and
//! an optional `e`/`E` exponent with optional sign. The plain scanner
//! handles exactly that. The enhanced scanner additionally accepts
//! underscore digit separators (`1_000_000`), keeping two spellings: the
//! display text with separators intact for diagnostics and tooling, and a
//! cleaned copy without them for numeric conversion checks.
//!
//! Which variant runs is decided up front by a bounded probe for an
//! underscore; the common case never pays for separator handling.
//!
//! Permissive edges, resolved in favor of lexing a number:
//! - a trailing decimal point is part of the literal (`5.` lexes whole)
//! - a leading decimal point needs a following digit (`.5` is a number,
//!   a bare `.` is an operator)
//! - `e`/`E` is an exponent marker only when followed by a digit or a
//!   sign; otherwise it is left for the identifier scanner (`5e` lexes
//!   as `5` then `e`)

use lilt_lexer_core::TextAccumulator;

use crate::lex_error::LexErrorKind;
use crate::lexer::Lexer;
use crate::token::Token;

/// Character cap for one numeric literal.
pub(crate) const NUMBER_CHAR_CAP: usize = 64;
/// Byte cap for one numeric literal.
pub(crate) const NUMBER_BYTE_CAP: usize = 256;

/// How far the underscore probe looks before settling on the plain
/// scanner. Matches the character cap: a separator past it could only
/// belong to a literal that overflows anyway.
const UNDERSCORE_PROBE_LIMIT: usize = NUMBER_CHAR_CAP;

impl Lexer<'_> {
    /// Scan a numeric literal. The current byte is a digit, or a dot
    /// with a digit behind it.
    pub(crate) fn scan_number(&mut self) -> Option<Token> {
        if self.upcoming_number_has_underscore() {
            self.scan_number_enhanced()
        } else {
            self.scan_number_plain()
        }
    }

    /// Probe ahead over number-shaped bytes looking for an underscore.
    fn upcoming_number_has_underscore(&self) -> bool {
        let mut probe = self.cursor;
        for _ in 0..UNDERSCORE_PROBE_LIMIT {
            match probe.current() {
                b'_' => return true,
                b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-' => probe.advance(),
                _ => return false,
            }
        }
        false
    }

    fn scan_number_plain(&mut self) -> Option<Token> {
        let mut acc = TextAccumulator::new(NUMBER_CHAR_CAP, NUMBER_BYTE_CAP);
        let mut seen_dot = false;
        loop {
            match self.cursor.current() {
                b @ b'0'..=b'9' => {
                    self.push_literal_byte(&mut acc, b, "numeric")?;
                    self.cursor.advance();
                }
                b'.' if !seen_dot => {
                    // A leading dot must introduce a digit; a trailing
                    // dot is part of the literal.
                    if acc.is_empty() && !self.cursor.peek().is_ascii_digit() {
                        break;
                    }
                    self.push_literal_byte(&mut acc, b'.', "numeric")?;
                    seen_dot = true;
                    self.cursor.advance();
                }
                _ => break,
            }
        }
        if !self.exponent_starts_here() {
            return Some(Token::number(acc.finish()));
        }
        let marker = self.cursor.current();
        self.push_literal_byte(&mut acc, marker, "numeric")?;
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            let sign = self.cursor.current();
            self.push_literal_byte(&mut acc, sign, "numeric")?;
            self.cursor.advance();
        }
        while self.cursor.current().is_ascii_digit() {
            let b = self.cursor.current();
            self.push_literal_byte(&mut acc, b, "numeric")?;
            self.cursor.advance();
        }
        Some(Token::number(acc.finish()))
    }

    /// Underscore-separated variant. Builds the display spelling in `acc`
    /// and a separator-free copy in `clean`; the literal is rejected when
    /// the cleaned spelling holds no digits.
    fn scan_number_enhanced(&mut self) -> Option<Token> {
        let mut acc = TextAccumulator::new(NUMBER_CHAR_CAP, NUMBER_BYTE_CAP);
        let mut clean = String::new();
        let mut seen_dot = false;
        loop {
            match self.cursor.current() {
                b @ b'0'..=b'9' => {
                    self.push_literal_byte(&mut acc, b, "numeric")?;
                    clean.push(char::from(b));
                    self.cursor.advance();
                }
                b'.' if !seen_dot => {
                    if acc.is_empty() && !self.cursor.peek().is_ascii_digit() {
                        break;
                    }
                    self.push_literal_byte(&mut acc, b'.', "numeric")?;
                    clean.push('.');
                    seen_dot = true;
                    self.cursor.advance();
                }
                b'_' => {
                    // Separators sit between digits: never first, never
                    // doubled, and always ahead of a digit or a dot.
                    if acc.is_empty() || acc.last() == Some('_') {
                        break;
                    }
                    let next = self.cursor.peek();
                    if !next.is_ascii_digit() && next != b'.' {
                        break;
                    }
                    self.push_literal_byte(&mut acc, b'_', "numeric")?;
                    self.cursor.advance();
                }
                _ => break,
            }
        }
        if self.exponent_starts_here() {
            let marker = self.cursor.current();
            self.push_literal_byte(&mut acc, marker, "numeric")?;
            clean.push(char::from(marker));
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                let sign = self.cursor.current();
                self.push_literal_byte(&mut acc, sign, "numeric")?;
                clean.push(char::from(sign));
                self.cursor.advance();
            }
            loop {
                match self.cursor.current() {
                    b @ b'0'..=b'9' => {
                        self.push_literal_byte(&mut acc, b, "numeric")?;
                        clean.push(char::from(b));
                        self.cursor.advance();
                    }
                    b'_' if acc.last().is_some_and(|c| c.is_ascii_digit())
                        && self.cursor.peek().is_ascii_digit() =>
                    {
                        self.push_literal_byte(&mut acc, b'_', "numeric")?;
                        self.cursor.advance();
                    }
                    _ => break,
                }
            }
        }
        if clean.is_empty() || clean == "." {
            self.recover(LexErrorKind::EmptyNumber);
            return None;
        }
        Some(Token::number(acc.finish()))
    }

    /// True when the current byte is an exponent marker with something
    /// that can follow it: a digit or a sign.
    fn exponent_starts_here(&self) -> bool {
        matches!(self.cursor.current(), b'e' | b'E')
            && (self.cursor.peek().is_ascii_digit() || matches!(self.cursor.peek(), b'+' | b'-'))
    }
}
