//! Tokenizer for HTTP request files.
//!
//! Turns the text of a request file into a [`TokenList`]: methods, URLs,
//! versions, headers, file variables, comments, separators and body lines.
//! Malformed input never aborts tokenization; it produces tokens carrying
//! [`LexError`]s instead, so the result is always usable.
//!
//! # Architecture
//!
//! - `rest_lexer_core` splits the source into classified lines and finds
//!   `{{...}}` delimiters.
//! - The tokenizer walks those lines through request/header/body states.
//! - A resolution pass checks every reference against the file's
//!   [`SymbolTable`].
//!
//! Tokenization is a pure function of the text: equal input gives equal
//! output.

pub mod docs;
mod lex_error;
mod resolve;
mod suggest;
mod token;
mod tokenizer;
mod validate;

pub use lex_error::{
    LexError, LexErrorContext, LexErrorKind, LexRelated, LexReplacement, LexSuggestion,
};
pub use token::{
    HoverKind, Reference, ReferenceKind, SymbolTable, Token, TokenFlags, TokenKind, TokenList,
};
pub use validate::SUPPORTED_VERSIONS;

use tokenizer::Tokenizer;

/// Which semantic checks run during tokenization.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexOptions {
    /// Report undefined variables and unknown system variables.
    pub validate_references: bool,
    /// Check request targets with a URL parser.
    pub validate_urls: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            validate_references: true,
            validate_urls: true,
        }
    }
}

/// Tokenize `text` with every check enabled.
pub fn tokenize(text: &str) -> TokenList {
    tokenize_with(text, LexOptions::default())
}

/// Tokenize `text` with the given checks.
pub fn tokenize_with(text: &str, options: LexOptions) -> TokenList {
    Tokenizer::new(text, options).run()
}
