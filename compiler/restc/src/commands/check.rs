//! The `check` command: report every problem in a request file.

use rest_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use rest_diagnostic::Publish;
use rest_lexer::{TokenFlags, TokenKind};

use super::{internal_error, read_source, Session};
use crate::options::CliOptions;

/// Run a full parse and print the published diagnostics.
///
/// Exits with status 1 when any error was found.
pub fn check_file(path: &str, options: &CliOptions) {
    let text = read_source(path);
    let session = Session::open(&text, options.engine_config());
    let snapshot = session.snapshot();

    let Some(tagger) = session.error_tagger() else {
        internal_error("buffer was not opened");
    };
    let truncated = match tagger.full_parse(&snapshot) {
        Ok(Publish::Replaced { truncated, .. }) => truncated,
        Ok(Publish::Cleared | Publish::Stale { .. } | Publish::Retired) => 0,
        Err(e) => internal_error(&e.to_string()),
    };

    let diagnostics = session.published();
    let errors = diagnostics.len();

    if !diagnostics.is_empty() {
        let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
        let mut emitter =
            TerminalEmitter::stderr(options.color, is_tty).with_source(path, text.as_str());
        emitter.emit_all(&diagnostics);
        emitter.emit_summary(errors);
        emitter.flush();
        if truncated > 0 {
            eprintln!("note: {truncated} more not shown (--error-limit={})", options.error_limit);
        }
    }

    if errors > 0 {
        std::process::exit(1);
    }

    let requests = session.aggregator().map_or(0, |aggregator| {
        count_requests(aggregator.current().tokens().iter().map(|t| (t.kind, t.flags)))
    });
    println!("OK: {path} ({requests} requests)");
}

/// Number of request lines: targets that are not query continuations.
fn count_requests(tokens: impl Iterator<Item = (TokenKind, TokenFlags)>) -> usize {
    tokens
        .filter(|(kind, flags)| {
            *kind == TokenKind::Url && !flags.contains(TokenFlags::QUERY_CONTINUATION)
        })
        .count()
}
