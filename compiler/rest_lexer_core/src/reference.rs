//! Variable reference delimiter scanning.
//!
//! References are written `{{name}}` and never span lines. An opening `{{`
//! without a closing `}}` runs to the end of the scanned bytes and is
//! reported as unterminated; scanning stops there.

use memchr::memmem;

/// One `{{...}}` occurrence, relative to the scanned bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawReference {
    /// Offset of the opening `{{`.
    pub start: u32,
    /// Length including both delimiters (or to the end when unterminated).
    pub len: u32,
    /// Whether the closing `}}` was found.
    pub terminated: bool,
}

impl RawReference {
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Offsets of the text between the delimiters.
    pub fn inner(&self) -> (u32, u32) {
        let inner_start = self.start + 2;
        let inner_end = if self.terminated {
            self.end() - 2
        } else {
            self.end()
        };
        (inner_start, inner_end.max(inner_start))
    }
}

/// Iterator over the references in a byte slice.
pub struct ReferenceScan<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Find every `{{...}}` reference in `bytes`, left to right.
pub fn scan_references(bytes: &[u8]) -> ReferenceScan<'_> {
    ReferenceScan { bytes, pos: 0 }
}

impl Iterator for ReferenceScan<'_> {
    type Item = RawReference;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "scanned slices are single lines of a u32-sized source"
    )]
    fn next(&mut self) -> Option<RawReference> {
        let rest = self.bytes.get(self.pos..)?;
        let open = self.pos + memmem::find(rest, b"{{")?;
        let body = open + 2;

        let reference = match memmem::find(&self.bytes[body..], b"}}") {
            Some(close) => {
                let end = body + close + 2;
                self.pos = end;
                RawReference {
                    start: open as u32,
                    len: (end - open) as u32,
                    terminated: true,
                }
            }
            None => {
                self.pos = self.bytes.len();
                RawReference {
                    start: open as u32,
                    len: (self.bytes.len() - open) as u32,
                    terminated: false,
                }
            }
        };
        Some(reference)
    }
}
