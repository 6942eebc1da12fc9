//! Raw line classification.

/// Context-free classification of one physical line.
///
/// Decided from the first bytes after leading whitespace only. Whether a
/// `Text` line is a request line, header or body depends on state the
/// scanner does not track.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawLineTag {
    /// Empty or whitespace only.
    Blank = 0,
    /// `###` request separator.
    Separator = 1,
    /// `#` or `//` comment.
    Comment = 2,
    /// `@name = value` file variable definition.
    Variable = 3,
    /// Anything else.
    Text = 4,
    /// End of input. Always zero length.
    Eof = 255,
}

impl RawLineTag {
    /// Classify line content (leading whitespace already stripped).
    pub fn classify(content: &[u8]) -> Self {
        match content {
            [] => RawLineTag::Blank,
            [b'#', b'#', b'#', ..] => RawLineTag::Separator,
            [b'#', ..] | [b'/', b'/', ..] => RawLineTag::Comment,
            [b'@', ..] => RawLineTag::Variable,
            _ => RawLineTag::Text,
        }
    }
}

/// One physical line.
///
/// ```text
///   @host = example.com  \r\n
/// ^ ^                  ^  ^
/// | content_start      |  line_end (newline_len = 2)
/// start                content_end
/// ```
///
/// Leading and trailing whitespace are excluded from the content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawLine {
    pub tag: RawLineTag,
    /// Offset of the first byte of the line.
    pub start: u32,
    /// Offset of the first non-whitespace byte.
    pub content_start: u32,
    /// Offset just past the last non-whitespace byte.
    pub content_end: u32,
    /// Offset of the line terminator (or EOF).
    pub line_end: u32,
    /// Length of the line terminator (0 on the last line).
    pub newline_len: u32,
}

impl RawLine {
    /// Offset just past the line terminator.
    #[inline]
    pub fn end(&self) -> u32 {
        self.line_end + self.newline_len
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.tag == RawLineTag::Blank
    }
}

#[cfg(test)]
mod tests;
