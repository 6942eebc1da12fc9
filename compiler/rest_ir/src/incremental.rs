//! Incremental Tracking Support
//!
//! Types for describing text changes and carrying spans across them.
//!
//! # Architecture
//!
//! 1. **Text Change** - one edit operation (insertion, deletion, replacement)
//!    expressed in the coordinates of the text it applies to.
//! 2. **Tracking** - moves a span computed against the old text into the new
//!    text's coordinate space, following a [`TrackingMode`].
//!
//! A sequence of changes is applied in order: change `n + 1` is expressed in
//! the coordinates produced by change `n`.

use crate::span::shift_offset;
use crate::Span;

/// A single text edit.
///
/// Represents a change to a text buffer where the region `[start, old_end)`
/// of the old text is replaced with `new_len` bytes of new text.
///
/// # Examples
///
/// ```
/// use rest_ir::TextChange;
///
/// // Insert "hello" at position 10
/// let insert = TextChange::insert(10, 5);
/// assert_eq!(insert.delta(), 5);
///
/// // Delete 3 bytes starting at position 5
/// let delete = TextChange::delete(5, 3);
/// assert_eq!(delete.delta(), -3);
///
/// // Replace "foo" (3 bytes) with "hello" (5 bytes) at position 0
/// let replace = TextChange::replace(0, 3, 5);
/// assert_eq!(replace.delta(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TextChange {
    /// Start byte offset in old text.
    pub start: u32,
    /// End byte offset in old text (exclusive).
    pub old_end: u32,
    /// Length of replacement text in bytes.
    pub new_len: u32,
}

impl TextChange {
    /// Create a new text change.
    #[inline]
    pub const fn new(start: u32, old_end: u32, new_len: u32) -> Self {
        TextChange {
            start,
            old_end,
            new_len,
        }
    }

    /// Create an insertion (no bytes removed).
    #[inline]
    pub const fn insert(at: u32, len: u32) -> Self {
        TextChange {
            start: at,
            old_end: at,
            new_len: len,
        }
    }

    /// Create a deletion (no bytes inserted).
    #[inline]
    pub const fn delete(start: u32, len: u32) -> Self {
        TextChange {
            start,
            old_end: start + len,
            new_len: 0,
        }
    }

    /// Create a replacement.
    #[inline]
    pub const fn replace(start: u32, old_len: u32, new_len: u32) -> Self {
        TextChange {
            start,
            old_end: start + old_len,
            new_len,
        }
    }

    /// Net change in text length (positive = grew, negative = shrank).
    #[inline]
    pub fn delta(&self) -> i64 {
        i64::from(self.new_len) - i64::from(self.old_end - self.start)
    }

    /// Length of the removed region in the old text.
    #[inline]
    pub const fn old_len(&self) -> u32 {
        self.old_end - self.start
    }

    /// New end position after the change is applied.
    #[inline]
    pub const fn new_end(&self) -> u32 {
        self.start + self.new_len
    }

    /// Check if this change removes nothing.
    #[inline]
    pub const fn is_insertion(&self) -> bool {
        self.start == self.old_end
    }

    /// The change that undoes this one, expressed in new-text coordinates.
    #[inline]
    #[must_use]
    pub const fn inverse(&self) -> TextChange {
        TextChange {
            start: self.start,
            old_end: self.start + self.new_len,
            new_len: self.old_end - self.start,
        }
    }

    /// Check if this change intersects with a span in the old text.
    ///
    /// Two ranges intersect if they share any byte positions.
    #[inline]
    pub fn intersects(&self, span: Span) -> bool {
        self.start < span.end && span.start < self.old_end
    }

    /// Check if this change completely contains a span.
    #[inline]
    pub fn contains(&self, span: Span) -> bool {
        self.start <= span.start && span.end <= self.old_end
    }

    /// Track a span computed against the old text into the new text.
    ///
    /// - Spans that end at or before the change are kept as-is.
    /// - Spans that start at or after the change are shifted by the delta.
    /// - Spans entirely removed by a deletion or replacement collapse to a
    ///   point at the change start.
    /// - Any other overlap rewrites part of the span's text and invalidates it.
    ///
    /// Insertions exactly at a boundary never grow an [`EdgeExclusive`]
    /// span; [`EdgeInclusive`] spans absorb them.
    ///
    /// [`EdgeExclusive`]: TrackingMode::EdgeExclusive
    /// [`EdgeInclusive`]: TrackingMode::EdgeInclusive
    pub fn track(&self, span: Span, mode: TrackingMode) -> Tracked {
        let delta = self.delta();

        if self.is_insertion() {
            let at = self.start;
            return match mode {
                TrackingMode::EdgeExclusive => {
                    if at <= span.start {
                        Tracked::Kept(span.shift(delta))
                    } else if at >= span.end {
                        Tracked::Kept(span)
                    } else {
                        Tracked::Invalidated
                    }
                }
                TrackingMode::EdgeInclusive => {
                    if at < span.start {
                        Tracked::Kept(span.shift(delta))
                    } else if at > span.end {
                        Tracked::Kept(span)
                    } else if at == span.start || at == span.end {
                        Tracked::Kept(Span::new(span.start, shift_offset(span.end, delta)))
                    } else {
                        Tracked::Invalidated
                    }
                }
            };
        }

        if self.old_end <= span.start {
            Tracked::Kept(span.shift(delta))
        } else if self.start >= span.end {
            Tracked::Kept(span)
        } else if self.contains(span) {
            Tracked::Collapsed(self.start)
        } else {
            Tracked::Invalidated
        }
    }

    /// Map a span conservatively across the change.
    ///
    /// Never invalidates: any endpoint inside or touching the changed region
    /// is pushed outward to cover the whole replacement. Used to find the
    /// candidate region in one snapshot that may correspond to a query
    /// range in another.
    pub fn widen(&self, span: Span) -> Span {
        let delta = self.delta();
        let start = if span.start < self.start {
            span.start
        } else if span.start > self.old_end {
            shift_offset(span.start, delta)
        } else {
            self.start
        };
        let end = if span.end < self.start {
            span.end
        } else if span.end > self.old_end {
            shift_offset(span.end, delta)
        } else {
            self.new_end()
        };
        Span::new(start, end.max(start))
    }
}

/// How a tracked span reacts to edits exactly at its boundaries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TrackingMode {
    /// Boundary insertions stay outside the span.
    #[default]
    EdgeExclusive,
    /// Boundary insertions extend the span.
    EdgeInclusive,
}

/// Result of tracking a span across a change.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tracked {
    /// The span survived, possibly shifted.
    Kept(Span),
    /// The span's text was removed entirely; only its position survives.
    Collapsed(u32),
    /// The change rewrote part of the span.
    Invalidated,
}

impl Tracked {
    /// Track a span through a sequence of changes applied in order.
    ///
    /// Once collapsed, the point keeps moving with later edits; once
    /// invalidated, tracking stops.
    pub fn through<'a>(
        span: Span,
        changes: impl IntoIterator<Item = &'a TextChange>,
        mode: TrackingMode,
    ) -> Tracked {
        let mut current = Tracked::Kept(span);
        for change in changes {
            current = match current {
                Tracked::Kept(span) => change.track(span, mode),
                Tracked::Collapsed(at) => match change.track(Span::point(at), mode) {
                    Tracked::Kept(point) => Tracked::Collapsed(point.start),
                    other => other,
                },
                Tracked::Invalidated => return Tracked::Invalidated,
            };
        }
        current
    }

    /// The surviving span, if any. Collapsed spans become zero-length.
    pub fn span(self) -> Option<Span> {
        match self {
            Tracked::Kept(span) => Some(span),
            Tracked::Collapsed(at) => Some(Span::point(at)),
            Tracked::Invalidated => None,
        }
    }
}
