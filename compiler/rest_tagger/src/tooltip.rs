//! Hover content and the resolvers that produce it.
//!
//! Resolution is asynchronous so a resolver may perform slow lookups
//! (schemas, environment files). The engine races every resolution
//! against the hover session's [`CancellationToken`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use rest_lexer::docs::{canonical_method, header_doc, method_doc, system_variable_doc};
use rest_lexer::{HoverKind, ReferenceKind, Token};

use crate::{CancellationToken, ResolveError, Tokenization};

/// Rich hover content: a heading and a body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tooltip {
    pub title: String,
    pub body: String,
}

impl Tooltip {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Tooltip {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            f.write_str(&self.title)
        } else {
            write!(f, "{}\n{}", self.title, self.body)
        }
    }
}

/// Result of a tooltip resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipOutcome {
    /// Finished before cancellation. `None` when there is nothing to show.
    Resolved(Option<Tooltip>),
    /// Cancelled; nothing will be delivered for this request.
    Cancelled,
}

impl TooltipOutcome {
    pub fn into_tooltip(self) -> Option<Tooltip> {
        match self {
            TooltipOutcome::Resolved(tooltip) => tooltip,
            TooltipOutcome::Cancelled => None,
        }
    }
}

/// What a resolver is asked about: one token of one tokenization pass and
/// the hover target under the trigger position.
#[derive(Clone, Debug)]
pub struct TooltipRequest {
    tokenization: Arc<Tokenization>,
    index: usize,
    hover: HoverKind,
}

impl TooltipRequest {
    pub(crate) fn new(tokenization: Arc<Tokenization>, index: usize, hover: HoverKind) -> Self {
        TooltipRequest {
            tokenization,
            index,
            hover,
        }
    }

    pub fn tokenization(&self) -> &Tokenization {
        &self.tokenization
    }

    pub fn token(&self) -> Option<&Token> {
        self.tokenization.token(self.index)
    }

    pub fn hover(&self) -> HoverKind {
        self.hover
    }
}

/// Produces hover content for a token.
///
/// Implementations should return promptly once `cancel` fires; the engine
/// discards whatever they return after that point.
#[async_trait]
pub trait TooltipResolver: Send + Sync {
    async fn resolve(
        &self,
        request: TooltipRequest,
        cancel: CancellationToken,
    ) -> Result<Option<Tooltip>, ResolveError>;
}

/// Resolver backed by the built-in method, header and system variable
/// documentation, and by the file's own variable definitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinResolver;

#[async_trait]
impl TooltipResolver for BuiltinResolver {
    async fn resolve(
        &self,
        request: TooltipRequest,
        _cancel: CancellationToken,
    ) -> Result<Option<Tooltip>, ResolveError> {
        Ok(builtin_tooltip(&request))
    }
}

/// Synchronous core of [`BuiltinResolver`].
pub fn builtin_tooltip(request: &TooltipRequest) -> Option<Tooltip> {
    let tokenization = request.tokenization();
    let symbols = tokenization.tokens().symbols();
    let token = request.token()?;
    let text = tokenization.text(token.span);

    match request.hover() {
        HoverKind::Method => {
            let method = canonical_method(text)?;
            Some(Tooltip::new(method, method_doc(method)?))
        }
        HoverKind::Header => Some(Tooltip::new(text, header_doc(text)?)),
        HoverKind::Variable => {
            let name = text.trim_start_matches('@');
            let value = symbols.variable(name)?;
            Some(Tooltip::new(text, display_value(tokenization.text(value))))
        }
        HoverKind::Reference(index) => {
            let part = token.parts.get(index)?;
            let name = tokenization.text(part.name);
            match part.kind {
                ReferenceKind::Variable => {
                    let value = symbols.variable(name)?;
                    Some(Tooltip::new(name, display_value(tokenization.text(value))))
                }
                ReferenceKind::System => Some(Tooltip::new(name, system_variable_doc(name)?)),
                ReferenceKind::Request => {
                    let request_name = name.split('.').next().unwrap_or(name);
                    Some(Tooltip::new(
                        name,
                        format!("Value taken from the response of request `{request_name}`."),
                    ))
                }
                ReferenceKind::Unresolved => None,
            }
        }
    }
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "(empty)".to_owned()
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests;
