//! Command handlers for the `rest` CLI.
//!
//! Each submodule implements one command. Shared utilities (reading a
//! file, opening it in an engine) live here in the module root.

use std::sync::Arc;

use rest_diagnostic::ErrorList;
use rest_ir::{BufferId, Snapshot};
use rest_tagger::{
    BufferRegistry, BuiltinResolver, EngineConfig, ErrorTagger, QuickInfoSource, TagAggregator,
    TextBuffer, TextSource,
};

mod check;
mod debug;
mod explain;
mod hover;

pub use check::check_file;
pub use debug::{lex_file, tags_file};
pub use explain::explain_error;
pub use hover::{hover_file, parse_position};

/// The single buffer a CLI invocation works on.
const BUFFER: BufferId = BufferId::new(1);

/// A file opened in an engine, with an in-memory error list.
pub(crate) struct Session {
    buffer: TextBuffer,
    errors: Arc<ErrorList>,
    registry: BufferRegistry,
}

impl Session {
    pub(crate) fn open(text: &str, config: EngineConfig) -> Self {
        let buffer = TextBuffer::new(BUFFER, text);
        let errors = Arc::new(ErrorList::new());
        let registry = BufferRegistry::new(config, errors.clone(), Arc::new(BuiltinResolver));
        let aggregator = registry.open(&buffer);
        tracing::debug!(
            bytes = text.len(),
            tokens = aggregator.current().tokens().len(),
            "opened request file"
        );
        Session {
            buffer,
            errors,
            registry,
        }
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        self.buffer.current_snapshot()
    }

    /// Diagnostics the engine last published for the file.
    pub(crate) fn published(&self) -> Vec<rest_diagnostic::Diagnostic> {
        self.errors.diagnostics(BUFFER)
    }

    pub(crate) fn aggregator(&self) -> Option<Arc<TagAggregator>> {
        self.registry.get(BUFFER)
    }

    pub(crate) fn error_tagger(&self) -> Option<ErrorTagger> {
        self.registry.error_tagger(BUFFER).ok()
    }

    pub(crate) fn quick_info(&self) -> Option<QuickInfoSource> {
        self.registry.quick_info(BUFFER).ok()
    }
}

/// Read a request file, exiting with a user-friendly message on failure.
///
/// Request files are UTF-8; UTF-16 files are rejected up front.
pub(crate) fn read_source(path: &str) -> String {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    match decode_source(bytes) {
        Ok(text) => text,
        Err(reason) => {
            eprintln!("'{path}' {reason}");
            std::process::exit(1);
        }
    }
}

/// Decode file contents as UTF-8.
pub(crate) fn decode_source(bytes: Vec<u8>) -> Result<String, &'static str> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err("is UTF-16 encoded; save it as UTF-8");
    }
    String::from_utf8(bytes).map_err(|_| "contains invalid UTF-8 data")
}

/// Report an engine failure. These indicate a bug, not a bad file.
pub(crate) fn internal_error(what: &str) -> ! {
    eprintln!("internal error: {what}");
    std::process::exit(2);
}
