//! Editable text buffers and the change events they emit.

use std::sync::Arc;

use parking_lot::RwLock;
use rest_ir::{BufferId, EditError, Snapshot, SnapshotVersion, TextChange, TextEdit};

/// Anything that can hand out the current snapshot of a buffer.
pub trait TextSource: Send + Sync {
    fn buffer(&self) -> BufferId;

    fn current_snapshot(&self) -> Snapshot;
}

/// One applied edit batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextChanged {
    pub before: Snapshot,
    pub after: Snapshot,
    /// In application order, each relative to the text the previous one produced.
    pub changes: Vec<TextChange>,
}

impl TextChanged {
    pub fn buffer(&self) -> BufferId {
        self.after.buffer()
    }
}

/// An in-memory buffer producing a new snapshot for every edit batch.
#[derive(Debug)]
pub struct TextBuffer {
    id: BufferId,
    current: RwLock<Snapshot>,
}

impl TextBuffer {
    pub fn new(id: BufferId, text: impl Into<Arc<str>>) -> Self {
        TextBuffer {
            id,
            current: RwLock::new(Snapshot::new(id, SnapshotVersion::INITIAL, text)),
        }
    }

    /// Apply `edits` (offsets relative to the current snapshot) atomically.
    pub fn apply(&self, edits: &[TextEdit]) -> Result<TextChanged, EditError> {
        let mut current = self.current.write();
        let (after, changes) = current.apply(edits)?;
        let before = std::mem::replace(&mut *current, after.clone());
        Ok(TextChanged {
            before,
            after,
            changes,
        })
    }
}

impl TextSource for TextBuffer {
    fn buffer(&self) -> BufferId {
        self.id
    }

    fn current_snapshot(&self) -> Snapshot {
        self.current.read().clone()
    }
}
