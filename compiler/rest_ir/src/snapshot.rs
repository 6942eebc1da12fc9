//! Immutable, versioned views of a text buffer.

use std::fmt;
use std::sync::Arc;

use crate::edit::{apply_edits, EditError, TextEdit};
use crate::{Span, TextChange};

/// Identity of a text buffer.
///
/// Stable for the buffer's lifetime; every snapshot of the buffer carries it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        BufferId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// Monotonically increasing snapshot version within one buffer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SnapshotVersion(u64);

impl SnapshotVersion {
    /// Version of a freshly opened buffer.
    pub const INITIAL: SnapshotVersion = SnapshotVersion(0);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        SnapshotVersion(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The version following this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        SnapshotVersion(self.0 + 1)
    }
}

impl fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Immutable text of one buffer at one version.
///
/// Cloning is cheap: the text is reference counted. Two snapshots are equal
/// when they belong to the same buffer and version; the text of a given
/// version never changes.
#[derive(Clone)]
pub struct Snapshot {
    buffer: BufferId,
    version: SnapshotVersion,
    text: Arc<str>,
}

impl Snapshot {
    pub fn new(buffer: BufferId, version: SnapshotVersion, text: impl Into<Arc<str>>) -> Self {
        Snapshot {
            buffer,
            version,
            text: text.into(),
        }
    }

    #[inline]
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    #[inline]
    pub fn version(&self) -> SnapshotVersion {
        self.version
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the text.
    #[inline]
    pub fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    /// Length in bytes, saturating at `u32::MAX`.
    #[inline]
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Span covering the whole snapshot.
    #[inline]
    pub fn full_span(&self) -> Span {
        Span::new(0, self.len())
    }

    /// Check that a span lies within this snapshot.
    #[inline]
    pub fn contains_span(&self, span: Span) -> bool {
        span.start <= span.end && span.end <= self.len()
    }

    /// Text covered by `span`, or `None` if it is out of bounds or splits a
    /// UTF-8 sequence.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.to_range())
    }

    /// A position bound to this snapshot.
    #[inline]
    pub fn point(&self, offset: u32) -> SnapshotPoint {
        SnapshotPoint {
            buffer: self.buffer,
            version: self.version,
            offset,
        }
    }

    /// Apply a batch of edits, producing the next version.
    ///
    /// Returns the new snapshot together with the changes in the order they
    /// were applied; change `n + 1` is expressed in the coordinates produced
    /// by change `n`.
    pub fn apply(&self, edits: &[TextEdit]) -> Result<(Snapshot, Vec<TextChange>), EditError> {
        let (text, changes) = apply_edits(&self.text, edits)?;
        let next = Snapshot {
            buffer: self.buffer,
            version: self.version.next(),
            text: text.into(),
        };
        Ok((next, changes))
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer && self.version == other.version
    }
}

impl Eq for Snapshot {}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("buffer", &self.buffer)
            .field("version", &self.version)
            .field("len", &self.text.len())
            .finish()
    }
}

/// A byte offset bound to one snapshot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SnapshotPoint {
    pub buffer: BufferId,
    pub version: SnapshotVersion,
    pub offset: u32,
}
