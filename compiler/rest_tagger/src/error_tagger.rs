//! Error squiggles and error list reconciliation.

use std::sync::Arc;

use rest_diagnostic::{Publish, Reconciler};
use rest_ir::{NormalizedSpanSet, Snapshot, Span};
use smallvec::SmallVec;
use tracing::debug;

use crate::{EngineError, TagAggregator, Tags};

/// An error squiggle: where, and the text shown when hovering it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorTag {
    pub span: Span,
    pub tooltip: String,
}

/// Marks invalid tokens and keeps the buffer's error list in sync.
#[derive(Debug)]
pub struct ErrorTagger {
    aggregator: Arc<TagAggregator>,
    reconciler: Arc<Reconciler>,
}

impl ErrorTagger {
    pub fn new(aggregator: Arc<TagAggregator>, reconciler: Arc<Reconciler>) -> Self {
        ErrorTagger {
            aggregator,
            reconciler,
        }
    }

    /// Error tags touching `spans`.
    ///
    /// With `full_parse`, the complete diagnostic set of the queried
    /// snapshot is published first, clearing the error list when the
    /// snapshot has no errors.
    pub fn get_tags(
        &self,
        spans: &NormalizedSpanSet,
        full_parse: bool,
    ) -> Result<ErrorTags, EngineError> {
        if full_parse {
            self.full_parse(spans.snapshot())?;
        }
        Ok(ErrorTags {
            tags: self.aggregator.get_tags(spans)?,
            pending: SmallVec::new(),
        })
    }

    /// Publish every diagnostic of `snapshot`.
    pub fn full_parse(&self, snapshot: &Snapshot) -> Result<Publish, EngineError> {
        let tokenization = self.aggregator.tokenization_for(snapshot)?;
        let publish = self.reconciler.publish(
            self.aggregator.buffer(),
            tokenization.version(),
            tokenization.diagnostics(),
        );
        debug!(
            buffer = %self.aggregator.buffer(),
            version = %tokenization.version(),
            ?publish,
            "full parse"
        );
        Ok(publish)
    }

    /// Drop the buffer's entries from the error list.
    pub fn dispose(&self) {
        self.reconciler.retire(self.aggregator.buffer());
    }
}

/// Lazy iterator over the error tags of a query.
#[derive(Debug)]
pub struct ErrorTags {
    tags: Tags,
    /// Remaining spans of the current invalid token, last first.
    pending: SmallVec<[ErrorTag; 1]>,
}

impl Iterator for ErrorTags {
    type Item = ErrorTag;

    fn next(&mut self) -> Option<ErrorTag> {
        loop {
            if let Some(tag) = self.pending.pop() {
                return Some(tag);
            }
            let tag = self.tags.find(|tag| !tag.is_valid())?;
            let tooltip = tag.error_tooltip();
            self.pending = tag
                .spans()
                .iter()
                .rev()
                .map(|&span| ErrorTag {
                    span,
                    tooltip: tooltip.clone(),
                })
                .collect();
        }
    }
}
