//! Comment skipping.
//!
//! Line comments (`//`) run to the newline, which is left for the
//! dispatch loop so line structure is unaffected. Block comments
//! (`/* ... */`) may span lines and do not nest; a block comment that
//! never closes is consumed to end of input without complaint, matching
//! the lenient treatment of unterminated strings.

use crate::lexer::Lexer;

impl Lexer<'_> {
    /// Skip `//` to the end of the line. The newline is not consumed.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_until_newline_or_eof();
    }

    /// Skip `/* ... */`, tracking interior line breaks so indentation
    /// measurement restarts correctly after the comment.
    pub(crate) fn skip_block_comment(&mut self) {
        self.cursor.advance_n(2);
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => break,
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    break;
                }
                b'\n' => {
                    self.indent.note_newline();
                    self.cursor.advance();
                }
                _ => self.cursor.advance(),
            }
        }
    }
}
