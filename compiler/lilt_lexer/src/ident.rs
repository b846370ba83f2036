//! Identifier scanning.
//!
//! ASCII identifiers are letters, digits, `_`, and `-`; the hyphen makes
//! multi-word names like `total-count` one token, in keeping with the
//! language's natural-language flavor. The ASCII path is a tight byte
//! loop.
//!
//! Sources that open an identifier with a non-ASCII byte take the
//! Unicode path, which decodes whole characters and accepts letters from
//! the major scripts: extended Latin, Greek, Cyrillic, Armenian, Hebrew,
//! Arabic, several Indic ranges, Thai, Georgian, kana, CJK ideographs,
//! and Hangul. Inside a Unicode identifier the ASCII rules still apply
//! byte-for-byte, so mixed names like `π2` or `имя_x` scan as one token.
//!
//! Finished text goes through keyword resolution in the driver; this
//! module only collects it.

use lilt_lexer_core::TextAccumulator;

use crate::lexer::Lexer;
use crate::token::Token;

/// Character cap for one identifier.
pub(crate) const IDENT_CHAR_CAP: usize = 4096;
/// Byte cap for one identifier.
pub(crate) const IDENT_BYTE_CAP: usize = 8192;

/// ASCII identifier continuation byte.
pub(crate) fn is_ascii_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Character acceptable inside an identifier.
///
/// ASCII falls back to the byte rule; beyond ASCII, membership is by
/// script block.
pub(crate) fn is_unicode_ident_char(c: char) -> bool {
    if c.is_ascii() {
        return is_ascii_ident_byte(c as u8);
    }
    matches!(
        u32::from(c),
        0x00C0..=0x024F   // Latin-1 letters, Latin Extended-A/B
        | 0x0370..=0x03FF // Greek and Coptic
        | 0x0400..=0x04FF // Cyrillic
        | 0x0530..=0x058F // Armenian
        | 0x0590..=0x05FF // Hebrew
        | 0x0600..=0x06FF // Arabic
        | 0x0900..=0x097F // Devanagari
        | 0x0980..=0x09FF // Bengali
        | 0x0B80..=0x0BFF // Tamil
        | 0x0E00..=0x0E7F // Thai
        | 0x10A0..=0x10FF // Georgian
        | 0x3040..=0x309F // Hiragana
        | 0x30A0..=0x30FF // Katakana
        | 0x4E00..=0x9FFF // CJK Unified Ideographs
        | 0xAC00..=0xD7AF // Hangul Syllables
    )
}

impl Lexer<'_> {
    /// Scan an ASCII identifier. Collecting nothing (possible only when
    /// the Unicode path falls back here on a non-identifier character)
    /// skips that character and produces no token.
    pub(crate) fn scan_ident_ascii(&mut self) -> Option<Token> {
        let mut acc = TextAccumulator::new(IDENT_CHAR_CAP, IDENT_BYTE_CAP);
        loop {
            let b = self.cursor.current();
            if !is_ascii_ident_byte(b) {
                break;
            }
            self.push_literal_byte(&mut acc, b, "identifier")?;
            self.cursor.advance();
        }
        if acc.is_empty() {
            self.cursor.advance_char();
            return None;
        }
        Some(self.resolve_ident(acc.finish()))
    }

    /// Scan an identifier opening with a non-ASCII byte.
    pub(crate) fn scan_ident_unicode(&mut self) -> Option<Token> {
        match self.cursor.current_char() {
            Some(first) if is_unicode_ident_char(first) => {}
            // Not an identifier character: defer to the ASCII path,
            // which skips it
            _ => return self.scan_ident_ascii(),
        }
        let mut acc = TextAccumulator::new(IDENT_CHAR_CAP, IDENT_BYTE_CAP);
        loop {
            let b = self.cursor.current();
            if b < 0x80 {
                if !is_ascii_ident_byte(b) {
                    break;
                }
                self.push_literal_byte(&mut acc, b, "identifier")?;
                self.cursor.advance();
            } else {
                match self.cursor.current_char() {
                    Some(c) if is_unicode_ident_char(c) => {
                        self.push_literal_char(&mut acc, c, "identifier")?;
                        self.cursor.advance_char();
                    }
                    _ => break,
                }
            }
        }
        Some(self.resolve_ident(acc.finish()))
    }
}
