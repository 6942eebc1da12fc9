//! Rendering diagnostics for people.
//!
//! Sinks receive diagnostics as data; emitters turn them into text.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Writes diagnostics to some output.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit `diagnostics` in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|diagnostic| self.emit(diagnostic));
    }

    fn flush(&mut self);

    /// Closing line with the error count. Prints nothing for zero.
    fn emit_summary(&mut self, error_count: usize);
}
