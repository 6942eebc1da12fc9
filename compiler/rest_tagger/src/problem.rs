//! Lex error to diagnostic rendering.

use rest_diagnostic::{Diagnostic, ErrorCode};
use rest_lexer::{LexError, LexErrorKind};

/// Error code reported for a lex error kind.
pub fn error_code(kind: &LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::UnknownMethod { .. } => ErrorCode::E0001,
        LexErrorKind::InvalidUrl { .. } => ErrorCode::E0002,
        LexErrorKind::UnsupportedVersion { .. } | LexErrorKind::TrailingAfterVersion { .. } => {
            ErrorCode::E0003
        }
        LexErrorKind::InvalidHeaderName { .. } | LexErrorKind::EmptyHeaderName => ErrorCode::E0004,
        LexErrorKind::MissingHeaderColon { .. } => ErrorCode::E0005,
        LexErrorKind::InvalidVariableName { .. } => ErrorCode::E0006,
        LexErrorKind::MissingVariableEquals { .. } => ErrorCode::E0007,
        LexErrorKind::UnterminatedReference => ErrorCode::E0008,
        LexErrorKind::UndefinedVariable { .. } => ErrorCode::E0009,
        LexErrorKind::UnknownSystemVariable { .. } => ErrorCode::E0010,
        LexErrorKind::EmptyReference => ErrorCode::E0011,
        LexErrorKind::InvalidNullByte => ErrorCode::E0012,
    }
}

/// Render a `LexError` into a `Diagnostic` with its error code, message,
/// location, related locations and suggestions.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let mut diag = Diagnostic::error(error_code(&err.kind))
        .with_message(err.message())
        .at(err.span, err.context.describe());

    for related in &err.related {
        diag = diag.with_related(related.span, &related.message);
    }
    for suggestion in &err.suggestions {
        diag = diag.with_suggestion(&suggestion.message);
    }

    diag
}
