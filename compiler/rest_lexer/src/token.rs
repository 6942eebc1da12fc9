//! Token types for request files.

use std::fmt;

use bitflags::bitflags;
use rest_ir::Span;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::LexError;

/// Semantic classification of a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `GET`, `POST`, ...
    Method,
    /// Request target, or a `?`/`&` query continuation line.
    Url,
    /// `HTTP/1.1`
    Version,
    HeaderName,
    HeaderValue,
    /// `:` in headers, `=` in variable definitions.
    Operator,
    /// `@name` including the `@`.
    VariableName,
    VariableValue,
    /// `#` or `//` comment line.
    Comment,
    /// `###` line.
    Separator,
    /// One non-blank line of a request body.
    Body,
}

impl TokenKind {
    /// Display name used by the CLI and in logs.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Method => "method",
            TokenKind::Url => "url",
            TokenKind::Version => "version",
            TokenKind::HeaderName => "header-name",
            TokenKind::HeaderValue => "header-value",
            TokenKind::Operator => "operator",
            TokenKind::VariableName => "variable-name",
            TokenKind::VariableValue => "variable-value",
            TokenKind::Comment => "comment",
            TokenKind::Separator => "separator",
            TokenKind::Body => "body",
        }
    }

    /// Whether tokens of this kind may contain `{{...}}` references.
    pub fn can_reference(self) -> bool {
        matches!(
            self,
            TokenKind::Url | TokenKind::HeaderValue | TokenKind::VariableValue | TokenKind::Body
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Per-token metadata.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TokenFlags: u8 {
        /// At least one error is attached.
        const HAS_ERROR = 1 << 0;
        /// The token contains `{{...}}` parts.
        const HAS_REFERENCES = 1 << 1;
        /// `?`/`&` line continuing the request target.
        const QUERY_CONTINUATION = 1 << 2;
        /// Request line without a method (implicit `GET`).
        const IMPLICIT_METHOD = 1 << 3;
        /// `# @name foo` comment naming the next request.
        const NAMES_REQUEST = 1 << 4;
    }
}

/// What a reference resolved to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReferenceKind {
    /// `@name` defined somewhere in the file.
    Variable,
    /// `name` or `name.path` of a request named with `# @name`.
    Request,
    /// `$guid`, `$randomInt`, ...
    System,
    /// Not resolvable; the token carries an error for it.
    Unresolved,
}

/// A `{{...}}` sub-part of a multi-part token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Reference {
    /// Whole reference including delimiters.
    pub span: Span,
    /// Trimmed text between the delimiters (first word for system variables).
    pub name: Span,
    pub terminated: bool,
    pub kind: ReferenceKind,
}

/// What hovering over part of a token shows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HoverKind {
    /// Documentation of the HTTP method.
    Method,
    /// Documentation of a well-known header.
    Header,
    /// Value of the defined variable.
    Variable,
    /// The reference at this index of [`Token::parts`].
    Reference(usize),
}

/// A token with its span, validity and sub-parts.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub flags: TokenFlags,
    /// Empty exactly when the token is valid.
    pub errors: Vec<LexError>,
    /// References, in source order.
    pub parts: SmallVec<[Reference; 2]>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            flags: TokenFlags::empty(),
            errors: Vec::new(),
            parts: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn push_error(&mut self, error: LexError) {
        self.flags |= TokenFlags::HAS_ERROR;
        self.errors.push(error);
    }

    /// Hover content available at `position`.
    ///
    /// Multi-part tokens only have content over their references; the
    /// text between references has none.
    pub fn hover(&self, position: u32) -> Option<HoverKind> {
        if !self.span.contains(position) && self.span.end != position {
            return None;
        }
        match self.kind {
            TokenKind::Method => Some(HoverKind::Method),
            TokenKind::HeaderName if self.is_valid() => Some(HoverKind::Header),
            TokenKind::VariableName if self.is_valid() => Some(HoverKind::Variable),
            kind if kind.can_reference() => self
                .parts
                .iter()
                .position(|part| part.span.contains(position) || part.span.end == position)
                .map(HoverKind::Reference),
            _ => None,
        }
    }
}

/// Names defined anywhere in a file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolTable {
    /// Variable name to the span of its value (empty when the value is empty).
    variables: FxHashMap<String, Span>,
    /// Request names from `# @name` comments.
    requests: FxHashSet<String>,
}

impl SymbolTable {
    /// Record a variable. A later definition of the same name wins.
    pub(crate) fn define_variable(&mut self, name: &str, value: Span) {
        self.variables.insert(name.to_owned(), value);
    }

    pub(crate) fn define_request(&mut self, name: &str) {
        self.requests.insert(name.to_owned());
    }

    /// Span of the value of `name`.
    pub fn variable(&self, name: &str) -> Option<Span> {
        self.variables.get(name).copied()
    }

    /// Whether `reference` is a request name or a `name.path` into one.
    pub fn is_request(&self, reference: &str) -> bool {
        let head = reference.split('.').next().unwrap_or(reference);
        self.requests.contains(head)
    }

    /// Defined variable names, sorted.
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Named requests, sorted.
    pub fn request_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.requests.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The tokens of one file, ordered by start offset, plus its symbols.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
    symbols: SymbolTable,
}

impl TokenList {
    pub(crate) fn new(tokens: Vec<Token>, symbols: SymbolTable) -> Self {
        TokenList { tokens, symbols }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Index of the first token that ends at or after `offset`.
    ///
    /// Tokens never overlap, so their end offsets are sorted too.
    pub fn first_ending_at_or_after(&self, offset: u32) -> usize {
        self.tokens.partition_point(|token| token.span.end < offset)
    }

    /// Number of invalid tokens.
    pub fn error_count(&self) -> usize {
        self.tokens.iter().filter(|token| !token.is_valid()).count()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
