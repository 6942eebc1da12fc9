//! Normalized query span sets.

use crate::{Snapshot, Span};

/// A sorted, merged, deduplicated set of spans against one snapshot.
///
/// Overlapping and touching spans are merged. Empty spans are kept (they
/// are caret queries) unless another span already covers them.
#[derive(Clone, Debug)]
pub struct NormalizedSpanSet {
    snapshot: Snapshot,
    spans: Vec<Span>,
}

impl NormalizedSpanSet {
    pub fn new(snapshot: Snapshot, spans: impl IntoIterator<Item = Span>) -> Self {
        let mut spans: Vec<Span> = spans.into_iter().collect();
        spans.sort_unstable();

        let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => {
                    last.end = last.end.max(span.end);
                }
                _ => merged.push(span),
            }
        }

        NormalizedSpanSet {
            snapshot,
            spans: merged,
        }
    }

    /// A set holding a single span.
    pub fn single(snapshot: Snapshot, span: Span) -> Self {
        NormalizedSpanSet {
            snapshot,
            spans: vec![span],
        }
    }

    /// A set covering the entire snapshot.
    pub fn full(snapshot: Snapshot) -> Self {
        let span = snapshot.full_span();
        Self::single(snapshot, span)
    }

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }
}

impl<'a> IntoIterator for &'a NormalizedSpanSet {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

#[cfg(test)]
mod tests;
