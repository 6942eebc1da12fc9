//! Diagnostics sink contract and an in-memory error list.
//!
//! A sink receives complete diagnostic sets per buffer: either "clear all
//! diagnostics for this buffer" or "replace them with this set". It never
//! sees incremental patches.

use std::sync::Arc;

use parking_lot::Mutex;
use rest_ir::BufferId;
use rustc_hash::FxHashMap;

use crate::Diagnostic;

/// Receiver of per-buffer diagnostic sets, such as an IDE error list.
pub trait DiagnosticsSink: Send + Sync {
    /// Remove every diagnostic reported for `buffer`.
    fn clear_all(&self, buffer: BufferId);

    /// Replace the diagnostics of `buffer` with `diagnostics`.
    fn replace_all(&self, buffer: BufferId, diagnostics: Vec<Diagnostic>);
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for Arc<T> {
    fn clear_all(&self, buffer: BufferId) {
        (**self).clear_all(buffer);
    }

    fn replace_all(&self, buffer: BufferId, diagnostics: Vec<Diagnostic>) {
        (**self).replace_all(buffer, diagnostics);
    }
}

/// One call received by an [`ErrorList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SinkEvent {
    Cleared(BufferId),
    Replaced { buffer: BufferId, count: usize },
}

/// In-memory error list.
///
/// Keeps the current diagnostics per buffer and a log of every call, so
/// callers can tell "cleared" apart from "replaced with an empty set".
#[derive(Debug, Default)]
pub struct ErrorList {
    entries: Mutex<FxHashMap<BufferId, Vec<Diagnostic>>>,
    events: Mutex<Vec<SinkEvent>>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current diagnostics of `buffer`.
    pub fn diagnostics(&self, buffer: BufferId) -> Vec<Diagnostic> {
        self.entries.lock().get(&buffer).cloned().unwrap_or_default()
    }

    /// Number of diagnostics currently listed for `buffer`.
    pub fn len(&self, buffer: BufferId) -> usize {
        self.entries.lock().get(&buffer).map_or(0, Vec::len)
    }

    /// Total number of diagnostics across all buffers.
    pub fn total(&self) -> usize {
        self.entries.lock().values().map(Vec::len).sum()
    }

    /// Every call received so far, oldest first.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    /// The most recent call received for `buffer`.
    pub fn last_event(&self, buffer: BufferId) -> Option<SinkEvent> {
        self.events.lock().iter().rev().copied().find(|event| match event {
            SinkEvent::Cleared(b) | SinkEvent::Replaced { buffer: b, .. } => *b == buffer,
        })
    }
}

impl DiagnosticsSink for ErrorList {
    fn clear_all(&self, buffer: BufferId) {
        self.entries.lock().remove(&buffer);
        self.events.lock().push(SinkEvent::Cleared(buffer));
    }

    fn replace_all(&self, buffer: BufferId, diagnostics: Vec<Diagnostic>) {
        let count = diagnostics.len();
        self.entries.lock().insert(buffer, diagnostics);
        self.events.lock().push(SinkEvent::Replaced { buffer, count });
    }
}

#[cfg(test)]
mod tests;
