//! Line and column lookup for diagnostic positions.
//!
//! Line terminators are `\n`, `\r\n` and a lone `\r`, matching the lexer.

use rest_ir::Span;

/// Pre-computed line offset table for O(log L) line/column lookup.
///
/// # Example
///
/// ```
/// use rest_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "GET /\r\nAccept: */*\nHost: x";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 21), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source offsets are u32 throughout the toolchain"
    )]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut offsets = vec![0u32];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    offsets.push((i + 2) as u32);
                    i += 2;
                    continue;
                }
                b'\r' | b'\n' => offsets.push((i + 1) as u32),
                _ => {}
            }
            i += 1;
        }
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset using binary search.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 source length"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the line start.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());

        let col_text = source.get(line_start..end).unwrap_or("");
        let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Get the byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// 1-based (line, column) of a span's start.
    pub fn span_start(&self, source: &str, span: Span) -> (u32, u32) {
        self.offset_to_line_col(source, span.start)
    }
}

#[cfg(test)]
mod tests;
