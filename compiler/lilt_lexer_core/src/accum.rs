//! Growable text accumulator shared by the literal scanners.
//!
//! The number, string, and identifier scanners all build owned token text
//! incrementally. This type centralizes the growth discipline they share:
//! a fixed small initial capacity, capacity doubling on overflow, and two
//! hard limits — a character-count cap and a byte-size cap. Exceeding
//! either limit is reported to the caller instead of growing without
//! bound; the lexer responds by entering error recovery.

/// Initial buffer capacity in bytes. Doubles on each growth step.
const INITIAL_CAPACITY: usize = 16;

/// Which accumulator limit a push would have exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccumLimit {
    /// The character-count cap.
    Chars,
    /// The byte-size cap.
    Bytes,
}

/// Cap-enforced growable text buffer.
///
/// Push operations fail with [`AccumLimit`] instead of growing past the
/// caps supplied at construction. A failed push leaves the accumulated
/// text unchanged.
#[derive(Debug)]
pub struct TextAccumulator {
    buf: String,
    chars: usize,
    char_cap: usize,
    byte_cap: usize,
}

impl TextAccumulator {
    /// Create an accumulator bounded by `char_cap` characters and
    /// `byte_cap` bytes.
    pub fn new(char_cap: usize, byte_cap: usize) -> Self {
        Self {
            buf: String::with_capacity(INITIAL_CAPACITY.min(byte_cap)),
            chars: 0,
            char_cap,
            byte_cap,
        }
    }

    /// Grow the backing buffer (doubling) so `extra` more bytes fit,
    /// or report which cap the growth would break.
    fn ensure(&mut self, extra: usize) -> Result<(), AccumLimit> {
        let needed = self.buf.len() + extra;
        if needed > self.byte_cap {
            return Err(AccumLimit::Bytes);
        }
        if needed > self.buf.capacity() {
            let mut cap = self.buf.capacity().max(INITIAL_CAPACITY);
            while cap < needed {
                cap *= 2;
            }
            self.buf.reserve_exact(cap.min(self.byte_cap) - self.buf.len());
        }
        Ok(())
    }

    /// Append one ASCII byte.
    #[inline]
    pub fn push_byte(&mut self, b: u8) -> Result<(), AccumLimit> {
        debug_assert!(b.is_ascii(), "push_byte requires ASCII, got 0x{b:02X}");
        self.push_char(char::from(b))
    }

    /// Append one character.
    pub fn push_char(&mut self, c: char) -> Result<(), AccumLimit> {
        if self.chars + 1 > self.char_cap {
            return Err(AccumLimit::Chars);
        }
        self.ensure(c.len_utf8())?;
        self.buf.push(c);
        self.chars += 1;
        Ok(())
    }

    /// Append a string slice (counted as `s.chars().count()` characters).
    pub fn push_str(&mut self, s: &str) -> Result<(), AccumLimit> {
        let n = s.chars().count();
        if self.chars + n > self.char_cap {
            return Err(AccumLimit::Chars);
        }
        self.ensure(s.len())?;
        self.buf.push_str(s);
        self.chars += n;
        Ok(())
    }

    /// The accumulated text so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Accumulated length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Accumulated length in characters.
    pub fn char_len(&self) -> usize {
        self.chars
    }

    /// Returns `true` if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The most recently pushed character, if any.
    pub fn last(&self) -> Option<char> {
        self.buf.chars().next_back()
    }

    /// The character-count cap supplied at construction.
    pub fn char_cap(&self) -> usize {
        self.char_cap
    }

    /// The byte-size cap supplied at construction.
    pub fn byte_cap(&self) -> usize {
        self.byte_cap
    }

    /// Finalize into an owned `String`.
    pub fn finish(self) -> String {
        self.buf
    }
}
