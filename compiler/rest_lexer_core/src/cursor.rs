//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is detected when the current byte equals the sentinel (`0x00`) and
//! the position has reached the source length. A NUL at `pos < source_len`
//! is an interior null and is treated as ordinary content.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// At EOF this reads the zero padding.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos as usize + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = (self.pos + n).min(self.source_len);
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes between `start` and `end`.
    pub fn bytes(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end && end <= self.source_len);
        &self.buf[start as usize..end as usize]
    }

    /// Remaining source bytes from the current position.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF even if `pred(0)` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// The sentinel is neither space nor tab, so scanning terminates at EOF.
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

    /// Advance to the next `\n` or `\r`, or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < rest().len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Consume one line terminator (`\r\n`, `\n` or a lone `\r`).
    ///
    /// Returns the number of bytes consumed (0 when not at a terminator).
    pub fn eat_newline(&mut self) -> u32 {
        if self.is_eof() {
            return 0;
        }
        match (self.current(), self.peek()) {
            (b'\r', b'\n') => {
                self.pos += 2;
                2
            }
            (b'\r' | b'\n', _) => {
                self.pos += 1;
                1
            }
            _ => 0,
        }
    }
}
