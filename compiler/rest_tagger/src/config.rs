//! Engine configuration.

use rest_lexer::LexOptions;

/// Settings shared by every buffer an engine serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Edit batches retained for remapping tags between snapshots.
    pub history_limit: usize,
    /// Maximum diagnostics published per buffer (0 = unlimited).
    pub error_limit: usize,
    /// Report undefined variables and unknown system variables.
    pub validate_references: bool,
    /// Check request targets with a URL parser.
    pub validate_urls: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            history_limit: 64,
            error_limit: 0,
            validate_references: true,
            validate_urls: true,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }

    #[must_use]
    pub fn with_reference_validation(mut self, enabled: bool) -> Self {
        self.validate_references = enabled;
        self
    }

    #[must_use]
    pub fn with_url_validation(mut self, enabled: bool) -> Self {
        self.validate_urls = enabled;
        self
    }

    pub fn lex_options(&self) -> LexOptions {
        LexOptions {
            validate_references: self.validate_references,
            validate_urls: self.validate_urls,
        }
    }
}
