//! Diagnostic system for request files.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`rest explain E0001`)
//! - a clear message (what went wrong)
//! - a primary span (where it went wrong)
//! - related locations and suggestions (how to fix)
//!
//! Diagnostics reach an error list through a [`DiagnosticsSink`]. The
//! [`Reconciler`] sits in front of the sink and delivers complete
//! diagnostic sets per buffer with replace-all semantics, suppressing
//! sets computed for older snapshot versions.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod reconcile;
pub mod sink;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use reconcile::{Publish, Reconciler};
pub use sink::{DiagnosticsSink, ErrorList, SinkEvent};
