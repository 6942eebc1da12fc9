//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use rest_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text used to render `path:line:col` locations.
struct SourceContext {
    path: String,
    text: String,
    table: LineOffsetTable,
}

/// Terminal emitter with optional color support.
///
/// Without a source, labels print raw byte spans.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` decides colors for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Resolve label spans against `text` and print them as `path:line:col`.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceContext {
            path: path.into(),
            table: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn location(&self, span: Span) -> String {
        match &self.source {
            Some(src) => {
                let (line, col) = src.table.span_start(&src.text, span);
                format!("{}:{line}:{col}", src.path)
            }
            None => format!("{span:?}"),
        }
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(span) = diagnostic.span {
            let location = self.location(span);
            let _ = write!(self.writer, "  --> {location}");
            if !diagnostic.context.is_empty() {
                let _ = write!(self.writer, ": ");
                self.write_colored(&diagnostic.context, colors::ERROR);
            }
            let _ = writeln!(self.writer);
        }

        for label in &diagnostic.related {
            let location = self.location(label.span);
            let _ = write!(self.writer, "  ::: {location}: ");
            self.write_colored(&label.message, colors::SECONDARY);
            let _ = writeln!(self.writer);
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = writeln!(
                self.writer,
                ": found {error_count} error{}",
                plural_s(error_count)
            );
        }
    }
}
