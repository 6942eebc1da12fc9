//! Owned copy of a request file with a trailing NUL sentinel.
//!
//! The [`Cursor`] stops on the sentinel instead of checking bounds. Two
//! encoding conditions are recorded while copying: a leading UTF-8 BOM
//! (the line scanner skips it) and NUL bytes inside the content (each one
//! becomes an error on the token that contains it).

use crate::Cursor;

/// `0xEF 0xBB 0xBF`.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub(crate) const UTF8_BOM_LEN: u32 = 3;

/// A request file followed by one `0x00` byte.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Content, then the sentinel.
    buf: Vec<u8>,
    source_len: u32,
    issues: Vec<EncodingIssue>,
}

/// A byte sequence the tokenizer must treat specially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    pub pos: u32,
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// Byte order mark at offset 0.
    Utf8Bom,
    /// `0x00` before the end of the content.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` and scan it for encoding issues.
    ///
    /// Content past `u32::MAX` bytes is not scanned.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);

        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);

        let mut issues = Vec::new();
        if bytes.starts_with(UTF8_BOM) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::Utf8Bom,
                pos: 0,
                len: UTF8_BOM_LEN,
            });
        }
        issues.extend(
            memchr::memchr_iter(0, bytes)
                .map_while(|pos| u32::try_from(pos).ok())
                .map(|pos| EncodingIssue {
                    kind: EncodingIssueKind::InteriorNull,
                    pos,
                    len: 1,
                }),
        );

        SourceBuffer {
            buf,
            source_len,
            issues,
        }
    }

    /// The content, without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The content followed by the sentinel.
    pub fn with_sentinel(&self) -> &[u8] {
        &self.buf
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Issues in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.issues
    }

    pub fn has_bom(&self) -> bool {
        self.issues
            .first()
            .is_some_and(|issue| issue.kind == EncodingIssueKind::Utf8Bom)
    }

    /// Offsets of interior NUL bytes.
    pub fn nul_positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.issues
            .iter()
            .filter(|issue| issue.kind == EncodingIssueKind::InteriorNull)
            .map(|issue| issue.pos)
    }
}
