//! Versioned diagnostic-set reconciliation.
//!
//! Each tokenization pass publishes the complete diagnostic set of its
//! buffer together with the snapshot version it was computed for. The
//! reconciler forwards the set to the sink with replace-all semantics and
//! drops any set whose version is older than the last one delivered for
//! that buffer, so a slow pass can never overwrite the result of a newer
//! one. A retired buffer accepts nothing until it is revived.

use std::sync::Arc;

use parking_lot::Mutex;
use rest_ir::{BufferId, SnapshotVersion};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{Diagnostic, DiagnosticsSink};

/// What a [`Reconciler::publish`] call delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Publish {
    /// The set was empty; the sink was told to clear the buffer.
    Cleared,
    /// The sink received `delivered` diagnostics; `truncated` more were
    /// cut by the error limit.
    Replaced { delivered: usize, truncated: usize },
    /// A newer version was already delivered; nothing was sent.
    Stale { latest: SnapshotVersion },
    /// The buffer was retired; nothing was sent.
    Retired,
}

/// Delivery state of one buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Delivered {
    Version(SnapshotVersion),
    Retired,
}

/// Delivers full diagnostic sets to a sink, newest version wins.
pub struct Reconciler {
    sink: Arc<dyn DiagnosticsSink>,
    /// Maximum diagnostics delivered per buffer (0 = unlimited).
    error_limit: usize,
    /// Delivery state per buffer. Held across the sink call so deliveries
    /// for one buffer never interleave.
    delivered: Mutex<FxHashMap<BufferId, Delivered>>,
}

impl Reconciler {
    pub fn new(sink: Arc<dyn DiagnosticsSink>) -> Self {
        Reconciler {
            sink,
            error_limit: 0,
            delivered: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }

    /// Publish the complete diagnostic set of `buffer` at `version`.
    ///
    /// Publishing the same version again is allowed and re-delivers.
    pub fn publish(
        &self,
        buffer: BufferId,
        version: SnapshotVersion,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Publish {
        let mut delivered = self.delivered.lock();
        match delivered.get(&buffer) {
            Some(Delivered::Retired) => {
                debug!(%buffer, %version, "dropping diagnostic set of retired buffer");
                return Publish::Retired;
            }
            Some(&Delivered::Version(latest)) if version < latest => {
                debug!(%buffer, %version, %latest, "dropping stale diagnostic set");
                return Publish::Stale { latest };
            }
            _ => {}
        }
        delivered.insert(buffer, Delivered::Version(version));

        if diagnostics.is_empty() {
            trace!(%buffer, %version, "clearing diagnostics");
            self.sink.clear_all(buffer);
            return Publish::Cleared;
        }

        let mut truncated = 0;
        if self.error_limit > 0 && diagnostics.len() > self.error_limit {
            truncated = diagnostics.len() - self.error_limit;
            diagnostics.truncate(self.error_limit);
        }
        let count = diagnostics.len();
        trace!(%buffer, %version, count, truncated, "replacing diagnostics");
        self.sink.replace_all(buffer, diagnostics);
        Publish::Replaced {
            delivered: count,
            truncated,
        }
    }

    /// Last version delivered for `buffer`, `None` once it is retired.
    pub fn last_delivered(&self, buffer: BufferId) -> Option<SnapshotVersion> {
        match self.delivered.lock().get(&buffer) {
            Some(&Delivered::Version(version)) => Some(version),
            Some(Delivered::Retired) | None => None,
        }
    }

    /// Clear `buffer` from the sink and refuse its publishes until
    /// [`revive`](Self::revive).
    pub fn retire(&self, buffer: BufferId) {
        let mut delivered = self.delivered.lock();
        delivered.insert(buffer, Delivered::Retired);
        self.sink.clear_all(buffer);
    }

    /// Accept publishes for a retired `buffer` again, starting over at any
    /// version. No effect on a live buffer.
    pub fn revive(&self, buffer: BufferId) {
        let mut delivered = self.delivered.lock();
        if delivered.get(&buffer) == Some(&Delivered::Retired) {
            trace!(%buffer, "reviving retired buffer");
            delivered.remove(&buffer);
        }
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("error_limit", &self.error_limit)
            .field("buffers", &self.delivered.lock().len())
            .finish_non_exhaustive()
    }
}
