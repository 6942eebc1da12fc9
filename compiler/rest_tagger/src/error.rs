//! Engine errors.
//!
//! Only contract violations by the caller are errors. Malformed documents
//! produce invalid tokens, never an `Err`.

use rest_ir::{BufferId, Span};
use thiserror::Error;

/// A query the engine cannot answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("query for {found} sent to the tagger of {expected}")]
    BufferMismatch { expected: BufferId, found: BufferId },

    #[error("span {span:?} is outside the snapshot (length {len})")]
    SpanOutOfBounds { span: Span, len: u32 },

    #[error("no tagger registered for {0}")]
    UnknownBuffer(BufferId),
}

/// Failure inside a tooltip resolver.
///
/// Never reaches the hover UI: the engine logs it and reports no content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("lookup for `{subject}` failed: {reason}")]
    Lookup { subject: String, reason: String },
}
