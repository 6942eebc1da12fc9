//! Recent edits of one buffer, for moving spans between snapshot versions.

use std::collections::VecDeque;

use rest_ir::{SnapshotVersion, TextChange};
use tracing::trace;

/// Changes that turned snapshot `from` into snapshot `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct HistoryEntry {
    from: SnapshotVersion,
    to: SnapshotVersion,
    /// In application order, each relative to the text the previous one produced.
    changes: Vec<TextChange>,
}

/// Bounded log of edit batches, oldest first.
#[derive(Clone, Debug)]
pub struct EditHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl EditHistory {
    /// A history keeping at most `limit` batches (at least one).
    pub fn new(limit: usize) -> Self {
        EditHistory {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Record that `changes` turned `from` into `to`.
    ///
    /// A batch that does not continue the recorded chain starts a new one.
    pub fn record(&mut self, from: SnapshotVersion, to: SnapshotVersion, changes: Vec<TextChange>) {
        if self.latest().is_some_and(|latest| latest != from) {
            trace!(%from, "edit chain broken, dropping history");
            self.entries.clear();
        }
        self.entries.push_back(HistoryEntry { from, to, changes });
        while self.entries.len() > self.limit {
            if let Some(dropped) = self.entries.pop_front() {
                trace!(version = %dropped.from, "trimming edit history");
            }
        }
    }

    /// Newest version reachable through the history.
    pub fn latest(&self) -> Option<SnapshotVersion> {
        self.entries.back().map(|entry| entry.to)
    }

    /// Oldest version reachable through the history.
    pub fn oldest(&self) -> Option<SnapshotVersion> {
        self.entries.front().map(|entry| entry.from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The changes mapping offsets of `from` to offsets of `to`.
    ///
    /// Going backward yields the inverse changes in reverse order. `None`
    /// when either version is not reachable.
    pub fn changes_between(
        &self,
        from: SnapshotVersion,
        to: SnapshotVersion,
    ) -> Option<Vec<TextChange>> {
        if from == to {
            return Some(Vec::new());
        }
        if from > to {
            let forward = self.changes_between(to, from)?;
            return Some(forward.iter().rev().map(TextChange::inverse).collect());
        }

        let start = self.entries.iter().position(|entry| entry.from == from)?;
        let mut changes = Vec::new();
        for entry in self.entries.iter().skip(start) {
            changes.extend_from_slice(&entry.changes);
            if entry.to == to {
                return Some(changes);
            }
            if entry.to > to {
                return None;
            }
        }
        None
    }
}
