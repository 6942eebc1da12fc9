//! Text edits.
//!
//! A batch of edits is expressed against a single snapshot. Edits are applied
//! in reverse order (from end to start) so that applying one never moves the
//! region of an edit still to be applied.
//!
//! # Example
//!
//! ```
//! use rest_ir::{apply_edits, Span, TextEdit};
//!
//! let (text, changes) = apply_edits(
//!     "GET /users",
//!     &[TextEdit::replace(Span::new(0, 3), "POST"), TextEdit::insert(10, "/1")],
//! )
//! .unwrap_or_default();
//! assert_eq!(text, "POST /users/1");
//! assert_eq!(changes.len(), 2);
//! ```

use std::fmt;

use crate::{Span, TextChange};

/// A text edit against one snapshot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    /// The span to replace (empty span for insert).
    pub span: Span,
    /// The new text to insert.
    pub new_text: String,
}

impl TextEdit {
    /// Create a replacement edit.
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    /// Create an insertion edit at a specific position.
    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        TextEdit {
            span: Span::point(at),
            new_text: text.into(),
        }
    }

    /// Create a deletion edit.
    pub fn delete(span: Span) -> Self {
        TextEdit {
            span,
            new_text: String::new(),
        }
    }

    /// Check if this edit removes nothing.
    pub fn is_insert(&self) -> bool {
        self.span.is_empty() && !self.new_text.is_empty()
    }

    /// Check if this edit has no effect.
    pub fn is_noop(&self) -> bool {
        self.span.is_empty() && self.new_text.is_empty()
    }

    /// The [`TextChange`] this edit performs.
    ///
    /// Replacement text longer than `u32::MAX` saturates.
    pub fn to_change(&self) -> TextChange {
        let new_len = u32::try_from(self.new_text.len()).unwrap_or(u32::MAX);
        TextChange::new(self.span.start, self.span.end, new_len)
    }
}

/// Why a batch of edits could not be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// Two edits touch the same bytes.
    Overlap { first: TextEdit, second: TextEdit },
    /// An edit reaches past the end of the text.
    OutOfBounds { span: Span, len: u32 },
    /// An edit boundary falls inside a UTF-8 sequence.
    NotCharBoundary { offset: u32 },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Overlap { first, second } => {
                write!(f, "edits overlap: {:?} and {:?}", first.span, second.span)
            }
            EditError::OutOfBounds { span, len } => {
                write!(f, "edit {span:?} reaches past the end of the text ({len} bytes)")
            }
            EditError::NotCharBoundary { offset } => {
                write!(f, "edit boundary {offset} is not on a character boundary")
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Check a batch of edits for overlaps.
///
/// Insertions at the same position are independent and never conflict, nor
/// do edits that merely touch.
pub fn check_conflicts(edits: &[TextEdit]) -> Option<EditError> {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.span.start, e.span.end));

    sorted.windows(2).find_map(|pair| {
        let (a, b) = (pair[0], pair[1]);
        (a.span.end > b.span.start).then(|| EditError::Overlap {
            first: a.clone(),
            second: b.clone(),
        })
    })
}

/// Apply a batch of edits to `text`.
///
/// Returns the new text and the changes in the order they were applied
/// (descending position). Each change is expressed in the coordinates of the
/// text produced by the changes before it. No-op edits produce no change.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> Result<(String, Vec<TextChange>), EditError> {
    if let Some(conflict) = check_conflicts(edits) {
        return Err(conflict);
    }

    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    for edit in edits {
        if edit.span.start > edit.span.end || edit.span.end > len {
            return Err(EditError::OutOfBounds {
                span: edit.span,
                len,
            });
        }
        for offset in [edit.span.start, edit.span.end] {
            if !text.is_char_boundary(offset as usize) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
    }

    let mut sorted: Vec<&TextEdit> = edits.iter().filter(|e| !e.is_noop()).collect();
    // Sort by start position descending, then end position descending
    sorted.sort_by(|a, b| {
        b.span
            .start
            .cmp(&a.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut result = text.to_string();
    let mut changes = Vec::with_capacity(sorted.len());
    for edit in sorted {
        result.replace_range(edit.span.to_range(), &edit.new_text);
        changes.push(edit.to_change());
    }

    Ok((result, changes))
}
