//! Line-state tokenizer.
//!
//! Drives [`LineScanner`] through three states:
//!
//! ```text
//!              text line               blank line
//! RequestStart ---------> Headers ------------------> Body
//!      ^                                               |
//!      +------------------- `###` ---------------------+
//! ```
//!
//! Variable definitions and comments are only recognized before a request
//! line (and comments also between headers). Everything after the blank
//! line that ends the headers is body until the next separator.

use rest_ir::Span;
use rest_lexer_core::{scan_references, LineScanner, RawLine, RawLineTag, SourceBuffer};
use smallvec::SmallVec;

use crate::docs::{canonical_method, METHODS};
use crate::lex_error::LexErrorContext;
use crate::suggest::suggest_similar;
use crate::token::{Reference, ReferenceKind, SymbolTable, TokenFlags};
use crate::validate::{
    is_header_name, is_supported_version, is_valid_target, is_variable_name, looks_like_method,
};
use crate::{resolve, LexError, LexOptions, Token, TokenKind, TokenList};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    RequestStart,
    Headers,
    Body,
}

pub(crate) struct Tokenizer<'a> {
    text: &'a str,
    options: LexOptions,
    state: State,
    /// A `Name: value` line was seen in the current request. Query
    /// continuation lines are only recognized before the first header.
    seen_header: bool,
    tokens: Vec<Token>,
    symbols: SymbolTable,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(text: &'a str, options: LexOptions) -> Self {
        Tokenizer {
            text,
            options,
            state: State::RequestStart,
            seen_header: false,
            tokens: Vec::new(),
            symbols: SymbolTable::default(),
        }
    }

    pub(crate) fn run(mut self) -> TokenList {
        let buffer = SourceBuffer::new(self.text);
        for line in LineScanner::new(&buffer) {
            self.line(line);
        }
        resolve::resolve_references(&mut self.tokens, &self.symbols, self.text, self.options);
        attach_null_errors(&mut self.tokens, buffer.nul_positions());
        TokenList::new(self.tokens, self.symbols)
    }

    fn slice(&self, span: Span) -> &'a str {
        self.text.get(span.to_range()).unwrap_or_default()
    }

    fn line(&mut self, line: RawLine) {
        let content = Span::new(line.content_start, line.content_end);
        match (line.tag, self.state) {
            (RawLineTag::Separator, _) => {
                self.tokens.push(Token::new(TokenKind::Separator, content));
                self.state = State::RequestStart;
            }
            (RawLineTag::Blank, State::Headers) => self.state = State::Body,
            (RawLineTag::Blank | RawLineTag::Eof, _) => {}
            (_, State::Body) => self.push_with_references(TokenKind::Body, content),
            (RawLineTag::Comment, _) => self.comment(content),
            (RawLineTag::Variable, State::RequestStart) => self.variable(content),
            (_, State::RequestStart) => {
                self.request_line(content);
                self.state = State::Headers;
                self.seen_header = false;
            }
            (_, State::Headers) => {
                let text = self.slice(content);
                if !self.seen_header && (text.starts_with('?') || text.starts_with('&')) {
                    let mut token = self.with_references(TokenKind::Url, content);
                    token.flags |= TokenFlags::QUERY_CONTINUATION;
                    self.tokens.push(token);
                } else {
                    self.header(content);
                }
            }
        }
    }

    /// `# comment`, `// comment`, or `# @name request-name`.
    fn comment(&mut self, span: Span) {
        let text = self.slice(span);
        let body = text
            .strip_prefix("//")
            .or_else(|| text.strip_prefix('#'))
            .unwrap_or(text)
            .trim_start_matches(is_blank);

        let mut token = Token::new(TokenKind::Comment, span);
        if let Some(rest) = body.strip_prefix("@name") {
            if rest.starts_with(is_blank) {
                if let Some(name) = rest.split(is_blank).find(|word| !word.is_empty()) {
                    self.symbols.define_request(name);
                    token.flags |= TokenFlags::NAMES_REQUEST;
                }
            }
        }
        self.tokens.push(token);
    }

    /// `@name = value`
    fn variable(&mut self, span: Span) {
        let text = self.slice(span);
        let rest = text.strip_prefix('@').unwrap_or(text);

        let Some(eq) = rest.find('=') else {
            let mut token = Token::new(TokenKind::VariableName, span);
            token.push_error(LexError::missing_variable_equals(span, rest));
            self.tokens.push(token);
            return;
        };

        let name = rest[..eq].trim_end_matches(is_blank);
        let name_span = Span::with_len(span.start, 1 + len32(name));
        let mut name_token = Token::new(TokenKind::VariableName, name_span);
        let valid = is_variable_name(name);
        if !valid {
            name_token.push_error(LexError::invalid_variable_name(name_span, name));
        }
        self.tokens.push(name_token);

        let eq_offset = span.start + 1 + len32(&rest[..eq]);
        self.tokens
            .push(Token::new(TokenKind::Operator, Span::with_len(eq_offset, 1)));

        let value = self.trimmed_after(eq_offset + 1, span.end);
        if !value.is_empty() {
            self.push_with_references(TokenKind::VariableValue, value);
        }
        if valid {
            self.symbols.define_variable(name, value);
        }
    }

    /// `[METHOD] target [HTTP/x] [trailing...]`
    fn request_line(&mut self, span: Span) {
        let words = split_words(self.slice(span), span.start);
        let Some(&first) = words.first() else {
            return;
        };

        let first_text = self.slice(first);
        let targets = if words.len() >= 2 && looks_like_method(first_text) {
            let mut method = Token::new(TokenKind::Method, first);
            if canonical_method(first_text).is_none() {
                let upper = first_text.to_ascii_uppercase();
                let similar = suggest_similar(&upper, METHODS.iter().map(|&(name, _)| name));
                method.push_error(LexError::unknown_method(first, first_text, similar));
            }
            self.tokens.push(method);
            &words[1..]
        } else {
            &words[..]
        };

        let target_span = targets[0];
        let mut target = self.with_references(TokenKind::Url, target_span);
        if targets.len() == words.len() {
            target.flags |= TokenFlags::IMPLICIT_METHOD;
        }
        let target_text = self.slice(target_span);
        if self.options.validate_urls && target.parts.is_empty() && !is_valid_target(target_text)
        {
            target.push_error(LexError::invalid_url(target_span, target_text));
        }
        self.tokens.push(target);

        if let Some(&version_span) = targets.get(1) {
            let version_text = self.slice(version_span);
            let mut version = Token::new(TokenKind::Version, version_span);
            if !is_supported_version(version_text) {
                version.push_error(LexError::unsupported_version(version_span, version_text));
            }
            self.tokens.push(version);
        }

        if let Some(&first_trailing) = targets.get(2) {
            let trailing_span = Span::new(first_trailing.start, span.end);
            let mut trailing = Token::new(TokenKind::Version, trailing_span);
            trailing.push_error(LexError::trailing_after_version(
                trailing_span,
                self.slice(trailing_span),
            ));
            self.tokens.push(trailing);
        }
    }

    /// `Name: value`
    fn header(&mut self, span: Span) {
        self.seen_header = true;
        let text = self.slice(span);

        let Some(colon) = text.find(':') else {
            let mut token = Token::new(TokenKind::HeaderName, span);
            token.push_error(LexError::missing_header_colon(span, text));
            self.tokens.push(token);
            return;
        };

        let name = text[..colon].trim_end_matches(is_blank);
        let colon_offset = span.start + len32(&text[..colon]);
        let mut operator = Token::new(TokenKind::Operator, Span::with_len(colon_offset, 1));

        if name.is_empty() {
            operator.push_error(LexError::empty_header_name(operator.span));
        } else {
            let name_span = Span::with_len(span.start, len32(name));
            let mut name_token = Token::new(TokenKind::HeaderName, name_span);
            if !is_header_name(name) {
                name_token.push_error(LexError::invalid_header_name(name_span, name));
            }
            self.tokens.push(name_token);
        }
        self.tokens.push(operator);

        let value = self.trimmed_after(colon_offset + 1, span.end);
        if !value.is_empty() {
            self.push_with_references(TokenKind::HeaderValue, value);
        }
    }

    /// `start..end` with leading blanks removed (`end` is already trimmed).
    fn trimmed_after(&self, start: u32, end: u32) -> Span {
        let text = self.slice(Span::new(start, end));
        let skipped = len32(text) - len32(text.trim_start_matches(is_blank));
        Span::new(start + skipped, end)
    }

    fn push_with_references(&mut self, kind: TokenKind, span: Span) {
        let token = self.with_references(kind, span);
        self.tokens.push(token);
    }

    /// A token whose `{{...}}` parts are recorded but not yet resolved.
    fn with_references(&self, kind: TokenKind, span: Span) -> Token {
        let mut token = Token::new(kind, span);
        token.parts = self.scan_parts(span);
        if !token.parts.is_empty() {
            token.flags |= TokenFlags::HAS_REFERENCES;
        }
        token
    }

    fn scan_parts(&self, span: Span) -> SmallVec<[Reference; 2]> {
        let bytes = self.slice(span).as_bytes();
        scan_references(bytes)
            .map(|raw| {
                let (inner_start, inner_end) = raw.inner();
                let inner = Span::new(span.start + inner_start, span.start + inner_end);
                Reference {
                    span: Span::with_len(span.start + raw.start, raw.len),
                    name: reference_name(self.slice(inner), inner.start),
                    terminated: raw.terminated,
                    kind: ReferenceKind::Unresolved,
                }
            })
            .collect()
    }
}

/// Trimmed name inside a reference. System variables take arguments
/// (`{{$randomInt 1 10}}`), so only their first word is the name.
fn reference_name(inner: &str, offset: u32) -> Span {
    let trimmed = inner.trim_start_matches(is_blank);
    let start = offset + len32(inner) - len32(trimmed);
    let trimmed = trimmed.trim_end_matches(is_blank);
    let name = if trimmed.starts_with('$') {
        trimmed.split(is_blank).next().unwrap_or(trimmed)
    } else {
        trimmed
    };
    Span::with_len(start, len32(name))
}

/// Spans of the blank-separated words of `text`, offset by `base`.
///
/// Blanks inside `{{...}}` do not split words, so `{{$randomInt 1 10}}`
/// stays part of the target.
fn split_words(text: &str, base: u32) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut words = Vec::new();
    let mut word_start = None;
    let mut in_reference = false;
    let mut i = 0;
    while i < bytes.len() {
        let rest = &bytes[i..];
        if !in_reference && rest.starts_with(b"{{") {
            in_reference = true;
            word_start.get_or_insert(i);
            i += 2;
            continue;
        }
        if in_reference && rest.starts_with(b"}}") {
            in_reference = false;
            i += 2;
            continue;
        }
        let blank = bytes[i] == b' ' || bytes[i] == b'\t';
        if blank && !in_reference {
            if let Some(start) = word_start.take() {
                words.push(Span::new(base + to_u32(start), base + to_u32(i)));
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
        i += 1;
    }
    if let Some(start) = word_start {
        words.push(Span::new(base + to_u32(start), base + len32(text)));
    }
    words
}

/// Every NUL byte lies inside some token: lines holding one are never
/// blank, and every non-blank byte of a line belongs to a token.
fn attach_null_errors(tokens: &mut [Token], positions: impl Iterator<Item = u32>) {
    for pos in positions {
        let index = tokens.partition_point(|token| token.span.end <= pos);
        if let Some(token) = tokens.get_mut(index) {
            if token.span.contains(pos) {
                let context = context_of(token.kind);
                token.push_error(LexError::invalid_null_byte(Span::with_len(pos, 1), context));
            }
        }
    }
}

fn context_of(kind: TokenKind) -> LexErrorContext {
    match kind {
        TokenKind::HeaderName | TokenKind::HeaderValue | TokenKind::Operator => {
            LexErrorContext::Header
        }
        TokenKind::VariableName | TokenKind::VariableValue => LexErrorContext::VariableDefinition,
        TokenKind::Body => LexErrorContext::Body,
        TokenKind::Method
        | TokenKind::Url
        | TokenKind::Version
        | TokenKind::Comment
        | TokenKind::Separator => LexErrorContext::RequestLine,
    }
}

#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[inline]
fn len32(text: &str) -> u32 {
    to_u32(text.len())
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets come from a SourceBuffer whose length fits in u32"
)]
#[inline]
fn to_u32(n: usize) -> u32 {
    n as u32
}
