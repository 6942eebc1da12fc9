//! Reference resolution.
//!
//! Runs after every line has been tokenized, because variables and request
//! names are file-scoped: a reference may name a definition further down.

use crate::docs::system_variable_doc;
use crate::suggest::suggest_similar;
use crate::token::{ReferenceKind, SymbolTable};
use crate::{LexError, LexOptions, Token};

pub(crate) fn resolve_references(
    tokens: &mut [Token],
    symbols: &SymbolTable,
    text: &str,
    options: LexOptions,
) {
    let variable_names = symbols.variable_names();

    for token in tokens.iter_mut().filter(|token| !token.parts.is_empty()) {
        let mut errors = Vec::new();
        for part in &mut token.parts {
            let name = text.get(part.name.to_range()).unwrap_or_default();

            if !part.terminated {
                errors.push(LexError::unterminated_reference(part.span));
            } else if name.is_empty() {
                errors.push(LexError::empty_reference(part.span));
            } else if name.starts_with('$') {
                if system_variable_doc(name).is_some() {
                    part.kind = ReferenceKind::System;
                } else if options.validate_references {
                    errors.push(LexError::unknown_system_variable(part.span, name));
                }
            } else if symbols.variable(name).is_some() {
                part.kind = ReferenceKind::Variable;
            } else if symbols.is_request(name) {
                part.kind = ReferenceKind::Request;
            } else if options.validate_references {
                let similar = suggest_similar(name, variable_names.iter().copied())
                    .and_then(|candidate| Some((candidate, symbols.variable(candidate)?)));
                errors.push(LexError::undefined_variable(part.span, name, similar));
            }
        }
        for error in errors {
            token.push_error(error);
        }
    }
}
