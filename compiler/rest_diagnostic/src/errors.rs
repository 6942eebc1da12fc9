//! Embedded error documentation for `rest explain`.
//!
//! Each error code has a markdown file in `errors/` that explains the
//! error, shows an example and a fix. The files are embedded at compile
//! time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `EXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::E0001, include_str!("errors/E0001.md")),
    (ErrorCode::E0002, include_str!("errors/E0002.md")),
    (ErrorCode::E0003, include_str!("errors/E0003.md")),
    (ErrorCode::E0004, include_str!("errors/E0004.md")),
    (ErrorCode::E0005, include_str!("errors/E0005.md")),
    (ErrorCode::E0006, include_str!("errors/E0006.md")),
    (ErrorCode::E0007, include_str!("errors/E0007.md")),
    (ErrorCode::E0008, include_str!("errors/E0008.md")),
    (ErrorCode::E0009, include_str!("errors/E0009.md")),
    (ErrorCode::E0010, include_str!("errors/E0010.md")),
    (ErrorCode::E0011, include_str!("errors/E0011.md")),
    (ErrorCode::E0012, include_str!("errors/E0012.md")),
];
