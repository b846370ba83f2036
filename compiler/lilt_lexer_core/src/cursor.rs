//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position has
//! reached the source length; a null byte before that point is an interior
//! null, not EOF.
//!
//! The cursor is `Copy`: lookahead snapshots are a plain assignment and
//! restore is another one. Line and column are not tracked incrementally;
//! they are derived from the byte offset on demand by [`Cursor::line_col`],
//! which keeps every advance path branch-free.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00`, as must every byte after it.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel). Interior nulls also return
    /// `0x00`; use [`is_eof()`](Self::is_eof) to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding guarantee in-bounds
    /// reads past the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// The byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has consumed all source content.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on UTF-8
    /// character boundaries. Both hold when the bounds come from scanner
    /// token tracking, since the source was originally a valid `&str`.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: the buffer was built from a `&str` (valid UTF-8) and the
        // scanner only produces boundaries on character edges.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Decode the UTF-8 character starting at the current position.
    ///
    /// Returns `None` at EOF. The current position must be on a character
    /// boundary (true whenever the lexer dispatches on a leading byte).
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.slice(self.pos, self.source_len).chars().next()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    /// This holds for every standard byte classification predicate.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used for line comments and error-recovery resynchronization. The
    /// newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// A simple byte loop beats wider tricks for the short runs typical
    /// between tokens. The sentinel is neither space nor tab, so the loop
    /// terminates at EOF on its own.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        loop {
            let b = self.buf[self.pos as usize];
            if b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Derive the 1-based line and column for a byte offset.
    ///
    /// Line is one more than the number of `\n` bytes before `pos`; column
    /// is the byte distance from the last newline. Both searches use
    /// `memchr`, so the cost is proportional to the prefix length only when
    /// actually asked for — the advance paths never pay for it.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "newline count and positions are bounded by source_len which fits in u32"
    )]
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        let upto = &self.buf[..pos.min(self.source_len) as usize];
        let line = memchr::memchr_iter(b'\n', upto).count() as u32 + 1;
        let column = match memchr::memrchr(b'\n', upto) {
            Some(nl) => pos - nl as u32,
            None => pos + 1,
        };
        (line, column)
    }
}
