//! One immutable tokenization pass over one snapshot.

use std::sync::Arc;

use rest_diagnostic::Diagnostic;
use rest_ir::{Snapshot, SnapshotVersion, Span};
use rest_lexer::{tokenize_with, Token, TokenList};
use tracing::debug;

use crate::problem::render_lex_error;
use crate::EngineConfig;

/// The tokens of a snapshot. Shared read-only between every reader of the
/// snapshot's version.
#[derive(Debug, PartialEq, Eq)]
pub struct Tokenization {
    snapshot: Snapshot,
    tokens: TokenList,
}

impl Tokenization {
    /// Tokenize `snapshot`.
    ///
    /// Pure: the result depends only on the snapshot text and the config.
    pub fn compute(snapshot: &Snapshot, config: &EngineConfig) -> Arc<Tokenization> {
        let tokens = tokenize_with(snapshot.text(), config.lex_options());
        debug!(
            buffer = %snapshot.buffer(),
            version = %snapshot.version(),
            tokens = tokens.len(),
            errors = tokens.error_count(),
            "tokenized snapshot"
        );
        Arc::new(Tokenization {
            snapshot: snapshot.clone(),
            tokens,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn version(&self) -> SnapshotVersion {
        self.snapshot.version()
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Source text of `span`, empty if it is out of range.
    pub fn text(&self, span: Span) -> &str {
        self.snapshot.slice(span).unwrap_or_default()
    }

    /// Every diagnostic of the snapshot, in source order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.tokens
            .iter()
            .flat_map(|token| token.errors.iter().map(render_lex_error))
            .collect()
    }

    /// Whether any token is invalid.
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(|token| !token.is_valid())
    }
}
