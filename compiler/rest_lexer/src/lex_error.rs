//! Lexer error types.
//!
//! Errors follow a WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` naming the construct being read
//! - HOW: `suggestions` providing actionable fixes
//!
//! Errors are data attached to tokens. Tokenization never fails.

use std::fmt;

use rest_ir::Span;

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
    /// Other places involved, such as the definition of a similar name.
    pub related: Vec<LexRelated>,
    /// HOW to fix (actionable suggestions).
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Request Line ===
    /// First word of a request line is not a known HTTP verb.
    UnknownMethod { method: String },
    /// Request target is neither origin-form, `*`, nor an absolute URL.
    InvalidUrl { target: String },
    /// `HTTP/x` word names an unsupported protocol version.
    UnsupportedVersion { version: String },
    /// Text following the protocol version.
    TrailingAfterVersion { text: String },

    // === Headers ===
    /// Header name contains characters outside RFC 7230 `tchar`.
    InvalidHeaderName { name: String },
    /// `:` with nothing before it.
    EmptyHeaderName,
    /// Header line without a `:`.
    MissingHeaderColon { name: String },

    // === Variable Definitions ===
    /// `@name` with characters outside `[A-Za-z0-9_.-]`.
    InvalidVariableName { name: String },
    /// `@name` without `= value`.
    MissingVariableEquals { name: String },

    // === References ===
    /// `{{` without a closing `}}` on the same line.
    UnterminatedReference,
    /// `{{name}}` where `name` is neither a file variable nor a request.
    UndefinedVariable { name: String },
    /// `{{$name}}` where `$name` is not a system variable.
    UnknownSystemVariable { name: String },
    /// `{{}}`.
    EmptyReference,

    // === Encoding ===
    /// NUL byte inside the request file.
    InvalidNullByte,
}

/// Construct being read when an error was found.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Method, target and version of a request.
    #[default]
    RequestLine,
    /// `Name: value` lines after the request line.
    Header,
    /// `@name = value` lines before a request.
    VariableDefinition,
    /// Text after the blank line that ends the headers.
    Body,
    /// Inside `{{...}}`.
    Reference,
}

impl LexErrorContext {
    /// Short label for diagnostics ("in request line").
    pub fn describe(self) -> &'static str {
        match self {
            LexErrorContext::RequestLine => "in request line",
            LexErrorContext::Header => "in header",
            LexErrorContext::VariableDefinition => "in variable definition",
            LexErrorContext::Body => "in request body",
            LexErrorContext::Reference => "in variable reference",
        }
    }
}

/// A location related to an error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexRelated {
    pub span: Span,
    pub message: String,
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion with a replacement.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    /// Create an unknown method error, optionally suggesting a close verb.
    #[cold]
    pub fn unknown_method(span: Span, method: &str, similar: Option<&str>) -> Self {
        let suggestions = match similar {
            Some(verb) => vec![LexSuggestion::replace(
                format!("did you mean `{verb}`?"),
                span,
                verb,
            )],
            None => vec![LexSuggestion::text(
                "known methods are GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS, TRACE and CONNECT",
                1,
            )],
        };
        Self {
            span,
            kind: LexErrorKind::UnknownMethod {
                method: method.to_owned(),
            },
            context: LexErrorContext::RequestLine,
            related: Vec::new(),
            suggestions,
        }
    }

    #[cold]
    pub fn invalid_url(span: Span, target: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidUrl {
                target: target.to_owned(),
            },
            context: LexErrorContext::RequestLine,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                "use an absolute `http://` or `https://` URL, or a path starting with `/`",
                1,
            )],
        }
    }

    #[cold]
    pub fn unsupported_version(span: Span, version: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnsupportedVersion {
                version: version.to_owned(),
            },
            context: LexErrorContext::RequestLine,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                "supported versions are HTTP/1.0, HTTP/1.1, HTTP/2 and HTTP/3",
                1,
            )],
        }
    }

    #[cold]
    pub fn trailing_after_version(span: Span, text: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::TrailingAfterVersion {
                text: text.to_owned(),
            },
            context: LexErrorContext::RequestLine,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::replace("remove the trailing text", span, "")],
        }
    }

    #[cold]
    pub fn invalid_header_name(span: Span, name: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidHeaderName {
                name: name.to_owned(),
            },
            context: LexErrorContext::Header,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                "header names may contain letters, digits and `!#$%&'*+-.^_`|~`",
                1,
            )],
        }
    }

    #[cold]
    pub fn empty_header_name(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::EmptyHeaderName,
            context: LexErrorContext::Header,
            related: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn missing_header_colon(span: Span, name: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::MissingHeaderColon {
                name: name.to_owned(),
            },
            context: LexErrorContext::Header,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                "headers are written `Name: value`; separate the body with a blank line",
                1,
            )],
        }
    }

    #[cold]
    pub fn invalid_variable_name(span: Span, name: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidVariableName {
                name: name.to_owned(),
            },
            context: LexErrorContext::VariableDefinition,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                "variable names may contain letters, digits, `_`, `.` and `-`",
                1,
            )],
        }
    }

    #[cold]
    pub fn missing_variable_equals(span: Span, name: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::MissingVariableEquals {
                name: name.to_owned(),
            },
            context: LexErrorContext::VariableDefinition,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                format!("write `@{name} = value`"),
                0,
            )],
        }
    }

    #[cold]
    pub fn unterminated_reference(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedReference,
            context: LexErrorContext::Reference,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text("add closing `}}`", 0)],
        }
    }

    /// Create an undefined variable error, optionally suggesting a close
    /// name and pointing at the span where that name is defined.
    #[cold]
    pub fn undefined_variable(span: Span, name: &str, similar: Option<(&str, Span)>) -> Self {
        let (suggestions, related) = match similar {
            Some((candidate, defined_at)) => (
                vec![LexSuggestion::text(
                    format!("a variable with a similar name exists: `{candidate}`"),
                    0,
                )],
                vec![LexRelated {
                    span: defined_at,
                    message: format!("`{candidate}` is defined here"),
                }],
            ),
            None => (Vec::new(), Vec::new()),
        };
        Self {
            span,
            kind: LexErrorKind::UndefinedVariable {
                name: name.to_owned(),
            },
            context: LexErrorContext::Reference,
            related,
            suggestions,
        }
    }

    #[cold]
    pub fn unknown_system_variable(span: Span, name: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnknownSystemVariable {
                name: name.to_owned(),
            },
            context: LexErrorContext::Reference,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::text(
                "system variables are $guid, $randomInt, $timestamp, $datetime, \
                 $localDatetime, $processEnv, $dotenv and $aadToken",
                1,
            )],
        }
    }

    #[cold]
    pub fn empty_reference(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::EmptyReference,
            context: LexErrorContext::Reference,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::replace("remove the empty reference", span, "")],
        }
    }

    #[cold]
    pub fn invalid_null_byte(span: Span, context: LexErrorContext) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidNullByte,
            context,
            related: Vec::new(),
            suggestions: vec![LexSuggestion::replace("remove the NUL byte", span, "")],
        }
    }

    /// The one-line message shown in tooltips and the error list.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnknownMethod { method } => write!(f, "Unknown HTTP method `{method}`"),
            LexErrorKind::InvalidUrl { target } => {
                write!(f, "`{target}` is not a valid request URL")
            }
            LexErrorKind::UnsupportedVersion { version } => {
                write!(f, "Unsupported HTTP version `{version}`")
            }
            LexErrorKind::TrailingAfterVersion { text } => {
                write!(f, "Unexpected `{text}` after the HTTP version")
            }
            LexErrorKind::InvalidHeaderName { name } => write!(f, "Invalid header name `{name}`"),
            LexErrorKind::EmptyHeaderName => write!(f, "Expected a header name before `:`"),
            LexErrorKind::MissingHeaderColon { name } => {
                write!(f, "Expected `:` after header name `{name}`")
            }
            LexErrorKind::InvalidVariableName { name } => {
                write!(f, "Invalid variable name `{name}`")
            }
            LexErrorKind::MissingVariableEquals { name } => {
                write!(f, "Expected `=` after variable name `@{name}`")
            }
            LexErrorKind::UnterminatedReference => write!(f, "Unterminated variable reference"),
            LexErrorKind::UndefinedVariable { name } => {
                write!(f, "The variable `{name}` is not defined")
            }
            LexErrorKind::UnknownSystemVariable { name } => {
                write!(f, "Unknown system variable `{name}`")
            }
            LexErrorKind::EmptyReference => write!(f, "Empty variable reference"),
            LexErrorKind::InvalidNullByte => write!(f, "Invalid byte in request file"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.kind, self.span)
    }
}
