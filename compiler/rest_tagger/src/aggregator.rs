//! Per-buffer tag aggregation.
//!
//! The [`TagAggregator`] owns the cached tokenization of one buffer and the
//! edit history behind it. Every text change tokenizes the new snapshot and
//! supersedes the cache. Queries against snapshots older than the cache are
//! answered by remapping the cached tokens backward through the history.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rest_ir::{BufferId, NormalizedSpanSet, Snapshot};
use tracing::{debug, trace, warn};

use crate::{
    CancellationToken, EditHistory, EngineConfig, EngineError, TaggedSpan, Tags, TextChanged,
    Tokenization, TooltipOutcome, TooltipResolver,
};

/// Token tags of one buffer.
///
/// Shared by every reader of the buffer. All methods take `&self`.
pub struct TagAggregator {
    buffer: BufferId,
    config: EngineConfig,
    resolver: Arc<dyn TooltipResolver>,
    cache: RwLock<Arc<Tokenization>>,
    history: Mutex<EditHistory>,
}

impl TagAggregator {
    /// Aggregator for `snapshot`'s buffer, tokenizing it eagerly.
    pub fn new(
        snapshot: &Snapshot,
        config: EngineConfig,
        resolver: Arc<dyn TooltipResolver>,
    ) -> Self {
        TagAggregator {
            buffer: snapshot.buffer(),
            config,
            resolver,
            cache: RwLock::new(Tokenization::compute(snapshot, &config)),
            history: Mutex::new(EditHistory::new(config.history_limit)),
        }
    }

    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The most recent tokenization.
    pub fn current(&self) -> Arc<Tokenization> {
        Arc::clone(&*self.cache.read())
    }

    /// Record an edit batch and tokenize the snapshot it produced.
    pub fn text_changed(&self, event: &TextChanged) -> Result<(), EngineError> {
        self.check_buffer(event.buffer())?;
        trace!(
            buffer = %self.buffer,
            from = %event.before.version(),
            to = %event.after.version(),
            changes = event.changes.len(),
            "recording text change"
        );
        self.history.lock().record(
            event.before.version(),
            event.after.version(),
            event.changes.clone(),
        );
        if event.after.version() > self.current().version() {
            self.install(&Tokenization::compute(&event.after, &self.config));
        }
        Ok(())
    }

    /// The tokenization of exactly `snapshot`, computing it if needed.
    pub fn tokenization_for(&self, snapshot: &Snapshot) -> Result<Arc<Tokenization>, EngineError> {
        self.check_buffer(snapshot.buffer())?;
        let cached = self.current();
        if cached.version() == snapshot.version() {
            return Ok(cached);
        }
        let computed = Tokenization::compute(snapshot, &self.config);
        self.install(&computed);
        Ok(computed)
    }

    /// Replace the cache unless it already holds something newer.
    fn install(&self, tokenization: &Arc<Tokenization>) {
        let mut cache = self.cache.write();
        if tokenization.version() > cache.version() {
            debug!(
                buffer = %self.buffer,
                from = %cache.version(),
                to = %tokenization.version(),
                "replacing cached tokenization"
            );
            *cache = Arc::clone(tokenization);
        } else {
            trace!(
                buffer = %self.buffer,
                cached = %cache.version(),
                offered = %tokenization.version(),
                "keeping newer cached tokenization"
            );
        }
    }

    /// Tags touching `spans`, in document order.
    ///
    /// A snapshot newer than the cache is tokenized and becomes the cache.
    /// An older one is served by remapping the cache backward when the
    /// history still reaches it, and tokenized on the side otherwise.
    pub fn get_tags(&self, spans: &NormalizedSpanSet) -> Result<Tags, EngineError> {
        let target = spans.snapshot();
        self.check_buffer(target.buffer())?;
        if let Some(&span) = spans.iter().find(|&&span| !target.contains_span(span)) {
            return Err(EngineError::SpanOutOfBounds {
                span,
                len: target.len(),
            });
        }

        let cached = self.current();
        if cached.version() == target.version() {
            return Ok(Tags::direct(cached, spans.spans()));
        }

        if target.version() < cached.version() {
            let changes = self
                .history
                .lock()
                .changes_between(cached.version(), target.version());
            if let Some(changes) = changes {
                trace!(
                    buffer = %self.buffer,
                    from = %cached.version(),
                    to = %target.version(),
                    "remapping cached tags"
                );
                return Ok(Tags::remapped(cached, target.version(), changes, spans.spans()));
            }
        }

        debug!(
            buffer = %self.buffer,
            cached = %cached.version(),
            requested = %target.version(),
            "requested snapshot is not cached, tokenizing"
        );
        let computed = Tokenization::compute(target, &self.config);
        self.install(&computed);
        Ok(Tags::direct(computed, spans.spans()))
    }

    /// Resolve the tooltip of `tag` at `position` (in the tag's snapshot).
    ///
    /// Nothing is delivered once `cancel` fires, even if the resolver
    /// finished. Resolver failures are logged and reported as no content.
    pub async fn resolve_tooltip(
        &self,
        tag: &TaggedSpan,
        position: u32,
        cancel: &CancellationToken,
    ) -> TooltipOutcome {
        if cancel.is_cancelled() {
            return TooltipOutcome::Cancelled;
        }
        let Some(request) = tag.tooltip_request(position) else {
            return TooltipOutcome::Resolved(None);
        };

        let resolved = tokio::select! {
            biased;
            () = cancel.cancelled() => return TooltipOutcome::Cancelled,
            resolved = self.resolver.resolve(request, cancel.clone()) => resolved,
        };
        if cancel.is_cancelled() {
            return TooltipOutcome::Cancelled;
        }

        match resolved {
            Ok(tooltip) => TooltipOutcome::Resolved(tooltip),
            Err(err) => {
                warn!(buffer = %self.buffer, position, %err, "tooltip resolver failed");
                TooltipOutcome::Resolved(None)
            }
        }
    }

    fn check_buffer(&self, found: BufferId) -> Result<(), EngineError> {
        if found == self.buffer {
            Ok(())
        } else {
            Err(EngineError::BufferMismatch {
                expected: self.buffer,
                found,
            })
        }
    }
}

impl std::fmt::Debug for TagAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagAggregator")
            .field("buffer", &self.buffer)
            .field("version", &self.cache.read().version())
            .field("history", &self.history.lock().len())
            .finish_non_exhaustive()
    }
}
