//! Low-level scanner for HTTP request files.
//!
//! This crate knows nothing about requests, headers or variables as
//! semantic objects. It splits a sentinel-terminated buffer into lines,
//! classifies each line by its leading bytes, and finds `{{...}}`
//! reference delimiters. Interpretation (states, validation, diagnostics)
//! is the job of `rest_lexer`.
//!
//! # Layers
//!
//! 1. [`SourceBuffer`] - owned, sentinel-terminated copy of the source with
//!    encoding issues recorded at construction.
//! 2. [`Cursor`] - cheap, copyable byte cursor over the buffer.
//! 3. [`LineScanner`] - produces one [`RawLine`] per physical line.
//! 4. [`scan_references`] - finds variable references inside a line.

mod cursor;
mod line_scanner;
mod reference;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use line_scanner::LineScanner;
pub use reference::{scan_references, RawReference, ReferenceScan};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawLine, RawLineTag};
