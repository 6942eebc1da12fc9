//! Tag query results.
//!
//! A [`Tags`] iterator walks one cached tokenization and yields the tokens
//! touching the queried spans, with spans moved into the coordinates of the
//! queried snapshot. Work happens as the caller pulls; stopping early costs
//! nothing for the rest of the document.

use std::sync::Arc;

use rest_ir::{SnapshotVersion, Span, TextChange, Tracked, TrackingMode};
use rest_lexer::Token;
use smallvec::{smallvec, SmallVec};

use crate::{Tokenization, TooltipRequest};

/// One token as seen from a queried snapshot.
#[derive(Clone, Debug)]
pub struct TaggedSpan {
    source: Arc<Tokenization>,
    index: usize,
    version: SnapshotVersion,
    spans: SmallVec<[Span; 1]>,
}

impl TaggedSpan {
    /// The token, as tokenized in its source snapshot.
    pub fn token(&self) -> &Token {
        &self.source.tokens().as_slice()[self.index]
    }

    /// Spans covered by the token in the queried snapshot.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The first mapped span.
    pub fn span(&self) -> Option<Span> {
        self.spans.first().copied()
    }

    /// Version of the queried snapshot the spans refer to.
    pub fn version(&self) -> SnapshotVersion {
        self.version
    }

    /// The tokenization pass the token came from.
    pub fn source(&self) -> &Arc<Tokenization> {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        self.token().is_valid()
    }

    /// Every error message of the token, one per line.
    pub fn error_tooltip(&self) -> String {
        let messages: Vec<String> = self
            .token()
            .errors
            .iter()
            .map(rest_lexer::LexError::message)
            .collect();
        messages.join("\n")
    }

    /// The tooltip request for `position` (queried-snapshot coordinates).
    ///
    /// Collapsed spans have no text left to hover.
    pub(crate) fn tooltip_request(&self, position: u32) -> Option<TooltipRequest> {
        let mapped = self.span()?;
        if mapped.is_empty() || position < mapped.start || position > mapped.end {
            return None;
        }
        let token = self.token();
        let hover = token.hover(token.span.start + (position - mapped.start))?;
        Some(TooltipRequest::new(Arc::clone(&self.source), self.index, hover))
    }
}

/// Lazy iterator over the tags of a query.
///
/// Tokens are yielded in document order, each at most once, even when it
/// touches several query spans.
#[derive(Debug)]
pub struct Tags {
    source: Arc<Tokenization>,
    version: SnapshotVersion,
    /// Source snapshot to queried snapshot, in application order.
    changes: Vec<TextChange>,
    /// Query span in queried coordinates, paired with the source region
    /// that may map onto it.
    queries: Vec<(Span, Span)>,
    query: usize,
    next_token: usize,
    window_started: bool,
}

impl Tags {
    /// Tags of `source` for queries against the same snapshot.
    pub(crate) fn direct(source: Arc<Tokenization>, queries: &[Span]) -> Self {
        let version = source.version();
        Tags::new(
            source,
            version,
            Vec::new(),
            queries.iter().map(|&query| (query, query)).collect(),
        )
    }

    /// Tags of `source` for queries against the snapshot `changes` lead to.
    pub(crate) fn remapped(
        source: Arc<Tokenization>,
        version: SnapshotVersion,
        changes: Vec<TextChange>,
        queries: &[Span],
    ) -> Self {
        let queries = queries
            .iter()
            .map(|&query| {
                let window = changes
                    .iter()
                    .rev()
                    .fold(query, |window, change| change.inverse().widen(window));
                (query, window)
            })
            .collect();
        Tags::new(source, version, changes, queries)
    }

    fn new(
        source: Arc<Tokenization>,
        version: SnapshotVersion,
        changes: Vec<TextChange>,
        queries: Vec<(Span, Span)>,
    ) -> Self {
        Tags {
            source,
            version,
            changes,
            queries,
            query: 0,
            next_token: 0,
            window_started: false,
        }
    }

    /// Version of the tokenization the tags are read from.
    pub fn source_version(&self) -> SnapshotVersion {
        self.source.version()
    }

    fn advance_query(&mut self) {
        self.query += 1;
        self.window_started = false;
    }
}

/// Whether `span` lies entirely after what `query` can hit.
fn is_past(span: Span, query: Span) -> bool {
    if query.is_empty() {
        span.start > query.end
    } else {
        span.start >= query.end
    }
}

impl Iterator for Tags {
    type Item = TaggedSpan;

    fn next(&mut self) -> Option<TaggedSpan> {
        loop {
            let &(query, window) = self.queries.get(self.query)?;
            if !self.window_started {
                let first = self.source.tokens().first_ending_at_or_after(window.start);
                self.next_token = self.next_token.max(first);
                self.window_started = true;
            }

            let token_span = self.source.tokens().get(self.next_token)?.span;
            if token_span.start > window.end {
                self.advance_query();
                continue;
            }

            let mapped = Tracked::through(token_span, &self.changes, TrackingMode::EdgeExclusive);
            match mapped.span() {
                Some(span) if is_past(span, query) => self.advance_query(),
                Some(span) if span.is_hit_by(query) => {
                    let index = self.next_token;
                    self.next_token += 1;
                    return Some(TaggedSpan {
                        source: Arc::clone(&self.source),
                        index,
                        version: self.version,
                        spans: smallvec![span],
                    });
                }
                _ => self.next_token += 1,
            }
        }
    }
}
