//! Incremental tag engine for HTTP request files.
//!
//! Serves editor features (error squiggles, error list, hover) from one
//! shared tokenization per buffer:
//!
//! - [`TagAggregator`] caches the latest [`Tokenization`] of a buffer and
//!   answers [`NormalizedSpanSet`](rest_ir::NormalizedSpanSet) queries with a
//!   lazy [`Tags`] iterator, remapping spans through recorded edits when
//!   the queried snapshot is newer than the cache.
//! - [`ErrorTagger`] turns invalid tokens into [`ErrorTag`]s and, on a full
//!   parse, publishes the buffer's complete diagnostic set through a
//!   [`Reconciler`](rest_diagnostic::Reconciler).
//! - [`QuickInfoSource`] resolves hover content asynchronously, racing the
//!   [`TooltipResolver`] against a [`CancellationToken`].
//! - [`BufferRegistry`] holds one aggregator per open buffer.
//!
//! # Concurrency
//!
//! Every type here is `Send + Sync`. Tokenizations are immutable and shared
//! behind `Arc`; readers of one snapshot never block each other.

mod aggregator;
mod cancel;
mod config;
mod error;
mod error_tagger;
mod history;
pub mod problem;
mod quick_info;
mod registry;
mod tags;
mod text_source;
mod tokenization;
mod tooltip;

pub use aggregator::TagAggregator;
pub use cancel::CancellationToken;
pub use config::EngineConfig;
pub use error::{EngineError, ResolveError};
pub use error_tagger::{ErrorTag, ErrorTagger, ErrorTags};
pub use history::EditHistory;
pub use quick_info::{QuickInfoItem, QuickInfoOutcome, QuickInfoSource};
pub use registry::BufferRegistry;
pub use tags::{TaggedSpan, Tags};
pub use text_source::{TextBuffer, TextChanged, TextSource};
pub use tokenization::Tokenization;
pub use tooltip::{
    builtin_tooltip, BuiltinResolver, Tooltip, TooltipOutcome, TooltipRequest, TooltipResolver,
};
