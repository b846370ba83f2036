//! String literal scanning.
//!
//! Strings are double-quoted and may span lines. The scanner resolves
//! escapes while copying, so the token text is the final contents, not
//! the raw source spelling. Recognized escapes: `\n`, `\t`, `\r`, `\\`,
//! `\"`, and `\0`. An unrecognized escape is passed through raw, with
//! the backslash kept, so no input is ever lost.
//!
//! Unterminated strings are handled leniently: at end of input the
//! collected text becomes the token and no error is recorded. Later
//! stages see a string that simply runs to EOF.

use lilt_lexer_core::TextAccumulator;

use crate::lexer::Lexer;
use crate::token::Token;

/// Character cap for one string literal.
pub(crate) const STRING_CHAR_CAP: usize = 4096;
/// Byte cap for one string literal.
pub(crate) const STRING_BYTE_CAP: usize = 8192;

impl Lexer<'_> {
    /// Scan a string literal. The current byte is the opening quote.
    pub(crate) fn scan_string(&mut self) -> Option<Token> {
        self.cursor.advance();
        let mut acc = TextAccumulator::new(STRING_CHAR_CAP, STRING_BYTE_CAP);
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => break,
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    self.scan_escape(&mut acc)?;
                }
                b if b < 0x80 => {
                    self.push_literal_byte(&mut acc, b, "string")?;
                    self.cursor.advance();
                }
                _ => {
                    let start = self.cursor.pos();
                    self.cursor.advance_char();
                    let text = self.cursor.slice_from(start);
                    self.push_literal_str(&mut acc, text, "string")?;
                }
            }
        }
        Some(Token::string(acc.finish()))
    }

    /// Resolve one escape; the backslash is already consumed.
    fn scan_escape(&mut self, acc: &mut TextAccumulator) -> Option<()> {
        let resolved = match self.cursor.current() {
            b'n' => '\n',
            b't' => '\t',
            b'r' => '\r',
            b'\\' => '\\',
            b'"' => '"',
            b'0' => '\0',
            0 if self.cursor.is_eof() => {
                // Backslash at end of input: keep it, the loop ends next
                return self.push_literal_char(acc, '\\', "string");
            }
            _ => {
                // Unknown escape: pass the backslash and the raw
                // character through unchanged
                self.push_literal_char(acc, '\\', "string")?;
                let start = self.cursor.pos();
                self.cursor.advance_char();
                let raw = self.cursor.slice_from(start);
                return self.push_literal_str(acc, raw, "string");
            }
        };
        self.push_literal_char(acc, resolved, "string")?;
        self.cursor.advance();
        Some(())
    }
}
