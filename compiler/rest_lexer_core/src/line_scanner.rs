//! Line scanner producing one [`RawLine`] per physical line.
//!
//! Line terminators are `\n`, `\r\n` and a lone `\r`. A UTF-8 BOM at the
//! start of the buffer is skipped as trivia. Error conditions do not exist
//! at this level: every byte belongs to exactly one line.

use crate::source_buffer::UTF8_BOM_LEN;
use crate::{Cursor, RawLine, RawLineTag, SourceBuffer};

/// Allocation-free line scanner.
pub struct LineScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> LineScanner<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        let mut cursor = buffer.cursor();
        if buffer.has_bom() {
            cursor.advance_n(UTF8_BOM_LEN);
        }
        Self { cursor }
    }

    /// Produce the next line.
    ///
    /// Returns a line tagged [`RawLineTag::Eof`] once the source is
    /// exhausted, and keeps returning it on subsequent calls. A final
    /// terminator does not start an extra empty line.
    pub fn next_line(&mut self) -> RawLine {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawLine {
                tag: RawLineTag::Eof,
                start,
                content_start: start,
                content_end: start,
                line_end: start,
                newline_len: 0,
            };
        }

        self.cursor.eat_whitespace();
        let content_start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let line_end = self.cursor.pos();

        let content = self.cursor.bytes(content_start, line_end);
        let trimmed = trim_trailing_whitespace(content);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "trimmed.len() <= content.len() which fits in u32"
        )]
        let content_end = content_start + trimmed.len() as u32;

        let newline_len = self.cursor.eat_newline();

        RawLine {
            tag: RawLineTag::classify(trimmed),
            start,
            content_start,
            content_end,
            line_end,
            newline_len,
        }
    }
}

impl Iterator for LineScanner<'_> {
    type Item = RawLine;

    fn next(&mut self) -> Option<RawLine> {
        let line = self.next_line();
        (line.tag != RawLineTag::Eof).then_some(line)
    }
}

fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ' && b != b'\t')
        .map_or(0, |i| i + 1);
    &bytes[..end]
}
