//! Source location spans.
//!
//! Compact 8-byte half-open byte ranges, always interpreted relative to
//! exactly one [`Snapshot`](crate::Snapshot).

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    EndTooLarge(usize),
    /// Span end lies before its start.
    Inverted { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => {
                write!(f, "span start {v} (0x{v:X}) exceeds u32::MAX (0x{:X})", u32::MAX)
            }
            SpanError::EndTooLarge(v) => {
                write!(f, "span end {v} (0x{v:X}) exceeds u32::MAX (0x{:X})", u32::MAX)
            }
            SpanError::Inverted { start, end } => {
                write!(f, "span end {end} lies before span start {start}")
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// Source location span `[start, end)`.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from the start of the snapshot
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from a start offset and a length.
    #[inline]
    pub const fn with_len(start: u32, len: u32) -> Self {
        Span {
            start,
            end: start + len,
        }
    }

    /// Try to create a span from a byte range.
    ///
    /// Returns an error if the range exceeds `u32::MAX` bytes or is inverted.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        if range.end < range.start {
            return Err(SpanError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check if the two spans share at least one byte.
    #[inline]
    pub fn overlaps(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if the two spans overlap or touch.
    ///
    /// Adjacent spans (`a.end == b.start`) intersect, as do a point span and
    /// a span that starts or ends at that point.
    #[inline]
    pub fn intersects(&self, other: Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Tag query hit test.
    ///
    /// A point query (empty span) hits every span it touches, so a caret
    /// right after a word still finds the word. A non-empty query only hits
    /// spans it overlaps.
    #[inline]
    pub fn is_hit_by(&self, query: Span) -> bool {
        if query.is_empty() {
            self.intersects(query)
        } else {
            self.overlaps(query)
        }
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Shift the span by `delta` bytes, saturating at zero.
    #[inline]
    #[must_use]
    pub fn shift(self, delta: i64) -> Span {
        Span {
            start: shift_offset(self.start, delta),
            end: shift_offset(self.end, delta),
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Shift an offset by a signed delta, clamping into `0..=u32::MAX`.
#[inline]
pub(crate) fn shift_offset(offset: u32, delta: i64) -> u32 {
    let shifted = i64::from(offset) + delta;
    u32::try_from(shifted.max(0)).unwrap_or(u32::MAX)
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<u32>> for Span {
    fn from(range: std::ops::Range<u32>) -> Self {
        Span::new(range.start, range.end)
    }
}
