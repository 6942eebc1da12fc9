//! Hover (quick info) over tokens.

use std::sync::Arc;

use rest_ir::{NormalizedSpanSet, Snapshot, Span};
use tracing::trace;

use crate::{CancellationToken, EngineError, TagAggregator, Tooltip, TooltipOutcome};

/// Hover content and the text range it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickInfoItem {
    pub applicable_to: Span,
    pub content: Tooltip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuickInfoOutcome {
    Resolved(Option<QuickInfoItem>),
    Cancelled,
}

impl QuickInfoOutcome {
    pub fn into_item(self) -> Option<QuickInfoItem> {
        match self {
            QuickInfoOutcome::Resolved(item) => item,
            QuickInfoOutcome::Cancelled => None,
        }
    }
}

/// Answers hover requests for one buffer.
#[derive(Clone, Debug)]
pub struct QuickInfoSource {
    aggregator: Arc<TagAggregator>,
}

impl QuickInfoSource {
    pub fn new(aggregator: Arc<TagAggregator>) -> Self {
        QuickInfoSource { aggregator }
    }

    /// Hover content for the caret at `position` in `snapshot`.
    ///
    /// Takes the first token touching the caret that has hover content at
    /// that exact position. Two tokens share a boundary when the caret sits
    /// between them.
    pub async fn quick_info(
        &self,
        snapshot: &Snapshot,
        position: u32,
        cancel: &CancellationToken,
    ) -> Result<QuickInfoOutcome, EngineError> {
        let query = NormalizedSpanSet::single(snapshot.clone(), Span::point(position));
        let tag = self
            .aggregator
            .get_tags(&query)?
            .find(|tag| tag.tooltip_request(position).is_some());
        let Some(tag) = tag else {
            trace!(position, "nothing to hover");
            return Ok(QuickInfoOutcome::Resolved(None));
        };

        let outcome = match self.aggregator.resolve_tooltip(&tag, position, cancel).await {
            TooltipOutcome::Cancelled => QuickInfoOutcome::Cancelled,
            TooltipOutcome::Resolved(content) => {
                QuickInfoOutcome::Resolved(content.map(|content| QuickInfoItem {
                    applicable_to: tag.span().unwrap_or(Span::point(position)),
                    content,
                }))
            }
        };
        Ok(outcome)
    }
}
