//! Per-buffer aggregator registry.
//!
//! One [`TagAggregator`] per open buffer, shared by every feature that
//! queries it so a snapshot is tokenized once no matter how many features
//! ask. Collaborators are passed in at construction.

use std::sync::Arc;

use dashmap::DashMap;
use rest_diagnostic::{DiagnosticsSink, Reconciler};
use rest_ir::{BufferId, Snapshot};
use tracing::debug;

use crate::{
    EngineConfig, EngineError, ErrorTagger, QuickInfoSource, TagAggregator, TextSource,
    TooltipResolver,
};

pub struct BufferRegistry {
    config: EngineConfig,
    resolver: Arc<dyn TooltipResolver>,
    reconciler: Arc<Reconciler>,
    aggregators: DashMap<BufferId, Arc<TagAggregator>>,
}

impl BufferRegistry {
    pub fn new(
        config: EngineConfig,
        sink: Arc<dyn DiagnosticsSink>,
        resolver: Arc<dyn TooltipResolver>,
    ) -> Self {
        BufferRegistry {
            config,
            resolver,
            reconciler: Arc::new(Reconciler::new(sink).with_error_limit(config.error_limit)),
            aggregators: DashMap::new(),
        }
    }

    /// The aggregator of `snapshot`'s buffer, created on first use.
    ///
    /// A buffer disposed earlier publishes diagnostics again from here on.
    pub fn get_or_create(&self, snapshot: &Snapshot) -> Arc<TagAggregator> {
        self.reconciler.revive(snapshot.buffer());
        let entry = self.aggregators.entry(snapshot.buffer()).or_insert_with(|| {
            debug!(buffer = %snapshot.buffer(), "creating tag aggregator");
            Arc::new(TagAggregator::new(
                snapshot,
                self.config,
                Arc::clone(&self.resolver),
            ))
        });
        Arc::clone(entry.value())
    }

    /// [`get_or_create`](Self::get_or_create) for a source's current snapshot.
    pub fn open(&self, source: &dyn TextSource) -> Arc<TagAggregator> {
        self.get_or_create(&source.current_snapshot())
    }

    pub fn get(&self, buffer: BufferId) -> Option<Arc<TagAggregator>> {
        self.aggregators.get(&buffer).map(|entry| Arc::clone(entry.value()))
    }

    pub fn error_tagger(&self, buffer: BufferId) -> Result<ErrorTagger, EngineError> {
        let aggregator = self.get(buffer).ok_or(EngineError::UnknownBuffer(buffer))?;
        Ok(ErrorTagger::new(aggregator, Arc::clone(&self.reconciler)))
    }

    pub fn quick_info(&self, buffer: BufferId) -> Result<QuickInfoSource, EngineError> {
        let aggregator = self.get(buffer).ok_or(EngineError::UnknownBuffer(buffer))?;
        Ok(QuickInfoSource::new(aggregator))
    }

    /// Forget `buffer` and clear its diagnostics. Returns whether it was open.
    pub fn dispose(&self, buffer: BufferId) -> bool {
        let removed = self.aggregators.remove(&buffer).is_some();
        if removed {
            debug!(%buffer, "disposing tag aggregator");
            self.reconciler.retire(buffer);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.aggregators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregators.is_empty()
    }
}

impl std::fmt::Debug for BufferRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferRegistry")
            .field("config", &self.config)
            .field("buffers", &self.aggregators.len())
            .finish_non_exhaustive()
    }
}
