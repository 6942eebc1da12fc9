//! Shared test utilities for engine tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rest_diagnostic::ErrorList;
use rest_ir::{BufferId, NormalizedSpanSet, Snapshot, Span, TextEdit};
use rest_tagger::{
    BufferRegistry, BuiltinResolver, CancellationToken, EngineConfig, ErrorTag, ErrorTagger,
    QuickInfoSource, ResolveError, TagAggregator, TextBuffer, TextSource, Tooltip,
    TooltipRequest, TooltipResolver,
};

pub const BUFFER: BufferId = BufferId::new(42);

/// One open buffer wired to a registry and an in-memory error list.
pub struct Harness {
    pub buffer: TextBuffer,
    pub errors: Arc<ErrorList>,
    pub registry: BufferRegistry,
}

impl Harness {
    pub fn new(text: &str) -> Self {
        Self::with(text, EngineConfig::default(), Arc::new(BuiltinResolver))
    }

    pub fn with_config(text: &str, config: EngineConfig) -> Self {
        Self::with(text, config, Arc::new(BuiltinResolver))
    }

    pub fn with_resolver(text: &str, resolver: Arc<dyn TooltipResolver>) -> Self {
        Self::with(text, EngineConfig::default(), resolver)
    }

    fn with(text: &str, config: EngineConfig, resolver: Arc<dyn TooltipResolver>) -> Self {
        let buffer = TextBuffer::new(BUFFER, text);
        let errors = Arc::new(ErrorList::new());
        let registry = BufferRegistry::new(config, errors.clone(), resolver);
        registry.open(&buffer);
        Harness {
            buffer,
            errors,
            registry,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.buffer.current_snapshot()
    }

    pub fn aggregator(&self) -> Arc<TagAggregator> {
        self.registry.get(BUFFER).expect("buffer is open")
    }

    pub fn error_tagger(&self) -> ErrorTagger {
        self.registry.error_tagger(BUFFER).expect("buffer is open")
    }

    pub fn quick_info(&self) -> QuickInfoSource {
        self.registry.quick_info(BUFFER).expect("buffer is open")
    }

    /// Apply `edits` and tell the engine, the way an editor would.
    pub fn edit(&self, edits: &[TextEdit]) -> Snapshot {
        let changed = self.buffer.apply(edits).expect("valid edit");
        self.aggregator().text_changed(&changed).expect("same buffer");
        changed.after
    }

    /// Replace the first occurrence of `from` with `to`.
    pub fn replace(&self, from: &str, to: &str) -> Snapshot {
        let text = self.snapshot().text().to_owned();
        let start = u32::try_from(text.find(from).expect("text present")).unwrap();
        let end = start + u32::try_from(from.len()).unwrap();
        self.edit(&[TextEdit::replace(Span::new(start, end), to)])
    }

    /// `(span, token text in its source snapshot)` for every tag of the
    /// whole current snapshot.
    pub fn tags(&self) -> Vec<(Span, String)> {
        self.tags_of(&self.snapshot())
    }

    /// Like [`Harness::tags`], for any snapshot of the buffer.
    pub fn tags_of(&self, snapshot: &Snapshot) -> Vec<(Span, String)> {
        let query = NormalizedSpanSet::full(snapshot.clone());
        self.aggregator()
            .get_tags(&query)
            .expect("valid query")
            .map(|tag| {
                let span = tag.span().expect("mapped");
                let text = tag.source().text(tag.token().span).to_owned();
                (span, text)
            })
            .collect()
    }

    /// Full-parse error tags of the whole current snapshot.
    pub fn full_parse(&self) -> Vec<ErrorTag> {
        let query = NormalizedSpanSet::full(self.snapshot());
        self.error_tagger()
            .get_tags(&query, true)
            .expect("valid query")
            .collect()
    }
}

/// Offset of the first occurrence of `needle` in `text`, plus `delta`.
pub fn offset_of(text: &str, needle: &str, delta: u32) -> u32 {
    u32::try_from(text.find(needle).expect("needle present")).unwrap() + delta
}

/// Resolver that takes `delay` before answering.
pub struct SlowResolver {
    pub delay: Duration,
}

#[async_trait]
impl TooltipResolver for SlowResolver {
    async fn resolve(
        &self,
        _request: TooltipRequest,
        _cancel: CancellationToken,
    ) -> Result<Option<Tooltip>, ResolveError> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(Tooltip::new("slow", "finally")))
    }
}

/// Resolver that always fails.
pub struct FailingResolver;

#[async_trait]
impl TooltipResolver for FailingResolver {
    async fn resolve(
        &self,
        request: TooltipRequest,
        _cancel: CancellationToken,
    ) -> Result<Option<Tooltip>, ResolveError> {
        Err(ResolveError::Lookup {
            subject: format!("{:?}", request.hover()),
            reason: "schema server unreachable".to_owned(),
        })
    }
}

/// Resolver that answers but cancels the session while doing so.
pub struct CancellingResolver;

#[async_trait]
impl TooltipResolver for CancellingResolver {
    async fn resolve(
        &self,
        _request: TooltipRequest,
        cancel: CancellationToken,
    ) -> Result<Option<Tooltip>, ResolveError> {
        cancel.cancel();
        Ok(Some(Tooltip::new("late", "too late")))
    }
}
