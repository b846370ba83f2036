//! The lexer driver: dispatch loop, lookahead, and error recovery.
//!
//! [`Lexer::next_token`] is the single entry point. Each call skips
//! whitespace and comments, settles at most one indentation decision, and
//! returns exactly one token; it never returns "nothing". End of input is
//! an ordinary token too: once the indentation stack is unwound, every
//! further call returns `Eof`.
//!
//! Lookahead is snapshot-based. The cursor is `Copy` and the rest of the
//! lexer state is cheap to clone, so [`Lexer::peek`] saves the state, runs
//! the real tokenizer forward, and restores. There is no token queue to
//! keep coherent with the indentation stack.
//!
//! Errors do not stop the lexer. A scanner that rejects its input records
//! a [`LexError`], skips to the next line boundary, and the dispatch loop
//! carries on from there.

use lilt_lexer_core::{AccumLimit, Cursor, SourceBuffer, TextAccumulator};

use crate::indent::{IndentStep, IndentTracker};
use crate::lex_error::{LexError, LexErrorKind, Location};
use crate::token::{Token, TokenKind};

/// Largest lookahead offset [`Lexer::peek`] accepts.
pub const MAX_PEEK_OFFSET: usize = 16;

/// Streaming lexer over a [`SourceBuffer`].
pub struct Lexer<'src> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) indent: IndentTracker,
    /// Set by the `as` keyword, cleared by the next identifier or keyword.
    in_type_context: bool,
    /// Whether the most recent identifier named a built-in type.
    last_type_name: bool,
    last_token_kind: Option<TokenKind>,
    /// Most recent unacknowledged error, if any.
    recovery: Option<LexError>,
}

impl<'src> Lexer<'src> {
    /// Lexer positioned at the start of `buffer`.
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            indent: IndentTracker::new(),
            in_type_context: false,
            last_type_name: false,
            last_token_kind: None,
            recovery: None,
        }
    }

    /// Produce the next token. Never returns "nothing": at end of input
    /// this yields pending `Dedent` tokens, then `Eof` forever.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_next();
        self.last_token_kind = Some(token.kind);
        token
    }

    /// Look ahead `offset` tokens without consuming anything (`0` is the
    /// very next token). Returns `None` past [`MAX_PEEK_OFFSET`].
    ///
    /// Runs the real tokenizer forward on a state snapshot and restores,
    /// so indentation bookkeeping and type context are unaffected.
    pub fn peek(&mut self, offset: usize) -> Option<Token> {
        if offset >= MAX_PEEK_OFFSET {
            return None;
        }
        let saved_cursor = self.cursor;
        let saved_indent = self.indent.clone();
        let saved_type_context = self.in_type_context;
        let saved_type_name = self.last_type_name;
        let saved_last_kind = self.last_token_kind;
        let saved_recovery = self.recovery.clone();

        let mut token = self.next_token();
        for _ in 0..offset {
            token = self.next_token();
        }

        self.cursor = saved_cursor;
        self.indent = saved_indent;
        self.in_type_context = saved_type_context;
        self.last_type_name = saved_type_name;
        self.last_token_kind = saved_last_kind;
        self.recovery = saved_recovery;
        Some(token)
    }

    /// Current position as line, column, and byte offset.
    pub fn location(&self) -> Location {
        let offset = self.cursor.pos();
        let (line, column) = self.cursor.line_col(offset);
        Location {
            line,
            column,
            offset,
        }
    }

    /// The kind of the most recently returned token.
    pub fn last_token_kind(&self) -> Option<TokenKind> {
        self.last_token_kind
    }

    /// True between an `as` keyword and the identifier or keyword that
    /// follows it.
    pub fn in_type_context(&self) -> bool {
        self.in_type_context
    }

    /// Whether the most recent identifier named a built-in type (only
    /// possible in type context).
    pub fn last_ident_was_type_name(&self) -> bool {
        self.last_type_name
    }

    /// Nesting depth of the indentation stack, not counting the base level.
    pub fn indent_depth(&self) -> usize {
        self.indent.depth() - 1
    }

    // === Error recovery ===

    /// Record an error at the current position and skip to the next line
    /// boundary. Lexing continues from there.
    ///
    /// Scanners call this on literal overflow; consumers may also call it
    /// for errors they detect themselves.
    pub fn enter_error_recovery(&mut self, message: impl Into<String>) {
        let message = message.into();
        let location = self.location();
        tracing::trace!(
            line = location.line,
            column = location.column,
            %message,
            "entering error recovery"
        );
        self.recovery = Some(LexError::new(location, message));
        self.cursor.eat_until_newline_or_eof();
    }

    pub(crate) fn recover(&mut self, kind: LexErrorKind) {
        self.enter_error_recovery(kind.to_string());
    }

    /// The most recent unacknowledged error, if any.
    pub fn last_error(&self) -> Option<&LexError> {
        self.recovery.as_ref()
    }

    /// True if an error has been recorded and not yet cleared.
    pub fn in_error_recovery(&self) -> bool {
        self.recovery.is_some()
    }

    /// Acknowledge and clear the recorded error, returning it.
    pub fn clear_error(&mut self) -> Option<LexError> {
        let err = self.recovery.take();
        if err.is_some() {
            tracing::trace!("exiting error recovery");
        }
        err
    }

    // === Dispatch ===

    fn scan_next(&mut self) -> Token {
        loop {
            self.skip_horizontal_whitespace();
            match self.cursor.current() {
                b'/' if self.cursor.peek() == b'/' => {
                    self.skip_line_comment();
                    continue;
                }
                b'/' if self.cursor.peek() == b'*' => {
                    self.skip_block_comment();
                    continue;
                }
                b'\r' => {
                    self.cursor.advance();
                    continue;
                }
                b'\n' => {
                    self.cursor.advance();
                    if self.indent.at_line_start() {
                        // Blank line: restart measurement, no token
                        self.indent.note_newline();
                        continue;
                    }
                    self.indent.note_newline();
                    return Token::spelled(TokenKind::Newline);
                }
                0 if self.cursor.is_eof() => {
                    if self.indent.unwind() {
                        return Token::spelled(TokenKind::Dedent);
                    }
                    return Token::eof();
                }
                _ => {}
            }
            // First content on this line: settle the indentation decision
            // before scanning the token itself.
            match self.indent.decide() {
                Some(IndentStep::Indent) => return Token::spelled(TokenKind::Indent),
                Some(IndentStep::Dedent) => return Token::spelled(TokenKind::Dedent),
                None => {}
            }
            if let Some(token) = self.scan_token() {
                return token;
            }
            // None: a skipped character or a scanner that entered
            // recovery. Either way the cursor moved, so loop.
        }
    }

    /// Skip spaces and tabs, measuring them when a line is starting.
    fn skip_horizontal_whitespace(&mut self) {
        if self.indent.at_line_start() {
            loop {
                match self.cursor.current() {
                    b' ' => {
                        self.indent.add_space();
                        self.cursor.advance();
                    }
                    b'\t' => {
                        self.indent.add_tab();
                        self.cursor.advance();
                    }
                    _ => break,
                }
            }
        } else {
            self.cursor.eat_whitespace();
        }
    }

    /// Scan one token at the current position. `None` means no token was
    /// produced (unrecognized character skipped, or recovery entered);
    /// the cursor has advanced either way.
    fn scan_token(&mut self) -> Option<Token> {
        match self.cursor.current() {
            b'0'..=b'9' => self.scan_number(),
            b'.' if self.cursor.peek().is_ascii_digit() => self.scan_number(),
            b'"' => self.scan_string(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.scan_ident_ascii(),
            0x80..=0xFF => self.scan_ident_unicode(),

            b'.' => Some(self.scan_dots()),
            b'+' => Some(self.single(TokenKind::Plus)),
            b'-' => Some(self.single(TokenKind::Minus)),
            b'*' => Some(self.single(TokenKind::Star)),
            b'/' => Some(self.single(TokenKind::Slash)),
            b'%' => Some(self.single(TokenKind::Percent)),
            b'=' => Some(self.one_or_two(TokenKind::Eq, b'=', TokenKind::EqEq)),
            b'!' => Some(self.one_or_two(TokenKind::Bang, b'=', TokenKind::NotEq)),
            b'<' => Some(self.one_or_two(TokenKind::Lt, b'=', TokenKind::LtEq)),
            b'>' => Some(self.one_or_two(TokenKind::Gt, b'=', TokenKind::GtEq)),
            b'&' => Some(self.one_or_two(TokenKind::Amp, b'&', TokenKind::AmpAmp)),
            b'|' => Some(self.one_or_two(TokenKind::Pipe, b'|', TokenKind::PipePipe)),
            b'(' => Some(self.single(TokenKind::LParen)),
            b')' => Some(self.single(TokenKind::RParen)),
            b'[' => Some(self.single(TokenKind::LBracket)),
            b']' => Some(self.single(TokenKind::RBracket)),
            b'{' => Some(self.single(TokenKind::LBrace)),
            b'}' => Some(self.single(TokenKind::RBrace)),
            b',' => Some(self.single(TokenKind::Comma)),
            b':' => Some(self.single(TokenKind::Colon)),
            b';' => Some(self.single(TokenKind::Semicolon)),
            b'?' => Some(self.single(TokenKind::Question)),

            _ => {
                // Unrecognized byte (control character, stray punctuation):
                // skip the whole character and move on.
                self.cursor.advance_char();
                None
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::spelled(kind)
    }

    /// One-byte token, or a two-byte token when `second` follows.
    fn one_or_two(&mut self, one: TokenKind, second: u8, two: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            return Token::spelled(two);
        }
        Token::spelled(one)
    }

    /// `.`, `..`, or `...` (a leading dot before a digit never gets here).
    fn scan_dots(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            if self.cursor.current() == b'.' {
                self.cursor.advance();
                return Token::spelled(TokenKind::DotDotDot);
            }
            return Token::spelled(TokenKind::DotDot);
        }
        Token::spelled(TokenKind::Dot)
    }

    // === Shared scanner plumbing ===

    /// Resolve finished identifier text to a keyword or identifier token,
    /// updating type-context state.
    pub(crate) fn resolve_ident(&mut self, text: String) -> Token {
        self.last_type_name = false;
        if let Some(kind) = crate::keywords::lookup(&text) {
            self.in_type_context = kind == TokenKind::As;
            return Token::spelled(kind);
        }
        if self.in_type_context {
            self.last_type_name = crate::keywords::is_type_name(&text);
        }
        self.in_type_context = false;
        Token::ident(text)
    }

    /// Push one ASCII byte into a literal accumulator, entering recovery
    /// on overflow. `None` means recovery was entered.
    pub(crate) fn push_literal_byte(
        &mut self,
        acc: &mut TextAccumulator,
        b: u8,
        what: &'static str,
    ) -> Option<()> {
        match acc.push_byte(b) {
            Ok(()) => Some(()),
            Err(limit) => {
                self.literal_overflow(what, limit, acc);
                None
            }
        }
    }

    /// Like [`push_literal_byte`](Self::push_literal_byte) for a full
    /// character.
    pub(crate) fn push_literal_char(
        &mut self,
        acc: &mut TextAccumulator,
        c: char,
        what: &'static str,
    ) -> Option<()> {
        match acc.push_char(c) {
            Ok(()) => Some(()),
            Err(limit) => {
                self.literal_overflow(what, limit, acc);
                None
            }
        }
    }

    /// Like [`push_literal_byte`](Self::push_literal_byte) for a string
    /// slice.
    pub(crate) fn push_literal_str(
        &mut self,
        acc: &mut TextAccumulator,
        s: &str,
        what: &'static str,
    ) -> Option<()> {
        match acc.push_str(s) {
            Ok(()) => Some(()),
            Err(limit) => {
                self.literal_overflow(what, limit, acc);
                None
            }
        }
    }

    fn literal_overflow(&mut self, what: &'static str, limit: AccumLimit, acc: &TextAccumulator) {
        let kind = match limit {
            AccumLimit::Chars => LexErrorKind::TooManyChars {
                what,
                limit: acc.char_cap(),
            },
            AccumLimit::Bytes => LexErrorKind::TooManyBytes {
                what,
                limit: acc.byte_cap(),
            },
        };
        self.recover(kind);
    }
}

#[cfg(test)]
mod tests;
