//! Debug commands: `lex` and `tags` for inspecting engine internals.

use rest_ir::{NormalizedSpanSet, Span};

use super::{internal_error, read_source, Session};
use crate::options::CliOptions;

/// Tokenize a file and display the token stream.
pub fn lex_file(path: &str, options: &CliOptions) {
    let text = read_source(path);
    let session = Session::open(&text, options.engine_config());
    let Some(aggregator) = session.aggregator() else {
        internal_error("buffer was not opened");
    };
    let tokenization = aggregator.current();
    let tokens = tokenization.tokens();

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in tokens {
        println!(
            "  {} @ {} {:?}",
            token.kind,
            token.span,
            tokenization.text(token.span)
        );
        for error in &token.errors {
            println!("    error: {}", error.message());
        }
    }
}

/// Run one tag query over `start..end` and display the tags.
///
/// `end` defaults to the end of the file.
pub fn tags_file(path: &str, start: u32, end: Option<u32>, options: &CliOptions) {
    let text = read_source(path);
    let session = Session::open(&text, options.engine_config());
    let snapshot = session.snapshot();
    let end = end.unwrap_or_else(|| snapshot.len());
    if start > end || end > snapshot.len() {
        eprintln!("error: range {start}..{end} is outside '{path}' (0..{})", snapshot.len());
        std::process::exit(1);
    }

    let Some(aggregator) = session.aggregator() else {
        internal_error("buffer was not opened");
    };
    let query = NormalizedSpanSet::single(snapshot, Span::new(start, end));
    let tags = match aggregator.get_tags(&query) {
        Ok(tags) => tags,
        Err(e) => internal_error(&e.to_string()),
    };

    println!("Tags for '{path}' in {start}..{end}:");
    for tag in tags {
        let spans: Vec<String> = tag.spans().iter().map(ToString::to_string).collect();
        let marker = if tag.is_valid() { "" } else { " (error)" };
        println!("  {} @ {}{marker}", tag.token().kind, spans.join(", "));
    }
}
