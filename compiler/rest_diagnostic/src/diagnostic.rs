use std::fmt;

use rest_ir::Span;

use crate::ErrorCode;

/// A location related to a problem, e.g. where a similar name is defined.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// One problem in a request file.
///
/// The same value feeds the error list (through a
/// [`DiagnosticsSink`](crate::DiagnosticsSink)) and terminal reports.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Where the problem is.
    pub span: Option<Span>,
    /// What was being read at `span` ("in request line", "in header").
    pub context: String,
    pub related: Vec<Label>,
    /// Fixes, phrased for the user.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: None,
            context: String::new(),
            related: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Locate the problem at `span`, read while in `context`.
    pub fn at(mut self, span: Span, context: impl Into<String>) -> Self {
        self.span = Some(span);
        self.context = context.into();
        self
    }

    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;

        if let Some(span) = self.span {
            write!(f, "\n  --> {span}")?;
            if !self.context.is_empty() {
                write!(f, ": {}", self.context)?;
            }
        }
        for label in &self.related {
            write!(f, "\n  ::: {}: {}", label.span, label.message)?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
