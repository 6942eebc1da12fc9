//! Rest IR - shared source-location types for request files.
//!
//! This crate contains the vocabulary every other `rest_*` crate speaks:
//! - [`Span`] for byte ranges inside one snapshot
//! - [`Snapshot`] for immutable, versioned views of a text buffer
//! - [`TextChange`] and [`Tracked`] for moving spans across edits
//! - [`TextEdit`] for applying edits to produce the next snapshot
//! - [`NormalizedSpanSet`] for tag queries
//!
//! # Design Philosophy
//!
//! - **Immutable snapshots**: text is never mutated in place, a new
//!   snapshot with a bumped version is created instead.
//! - **Offsets, not lines**: all positions are UTF-8 byte offsets stored as
//!   `u32`. Line/column conversion lives in `rest_diagnostic`.

pub mod edit;
pub mod incremental;
mod snapshot;
mod span;
mod span_set;

pub use edit::{apply_edits, check_conflicts, EditError, TextEdit};
pub use incremental::{TextChange, Tracked, TrackingMode};
pub use snapshot::{BufferId, Snapshot, SnapshotPoint, SnapshotVersion};
pub use span::{Span, SpanError};
pub use span_set::NormalizedSpanSet;
