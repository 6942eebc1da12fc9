//! The `hover` command: show what an editor would show under the caret.

use rest_diagnostic::span_utils::LineOffsetTable;
use rest_tagger::{CancellationToken, QuickInfoOutcome};

use super::{internal_error, read_source, Session};
use crate::options::CliOptions;

/// Resolve hover content at `position` (a byte offset or `line:col`).
pub fn hover_file(path: &str, position: &str, options: &CliOptions) {
    let text = read_source(path);
    let offset = match parse_position(&text, position) {
        Ok(offset) => offset,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let session = Session::open(&text, options.engine_config());
    let Some(source) = session.quick_info() else {
        internal_error("buffer was not opened");
    };
    let snapshot = session.snapshot();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => internal_error(&format!("cannot start runtime: {e}")),
    };
    let outcome =
        runtime.block_on(source.quick_info(&snapshot, offset, &CancellationToken::new()));

    match outcome {
        Ok(QuickInfoOutcome::Resolved(Some(item))) => {
            let (line, col) =
                LineOffsetTable::build(&text).offset_to_line_col(&text, item.applicable_to.start);
            println!("{path}:{line}:{col} ({})", item.applicable_to);
            println!("{}", item.content);
        }
        Ok(QuickInfoOutcome::Resolved(None) | QuickInfoOutcome::Cancelled) => {
            println!("No hover information");
        }
        Err(e) => internal_error(&e.to_string()),
    }
}

/// Parse a caret position: a byte offset, or 1-based `line:col` where the
/// column counts characters.
pub fn parse_position(text: &str, position: &str) -> Result<u32, String> {
    let len = u32::try_from(text.len()).map_err(|_| "file is too large".to_owned())?;

    let Some((line, col)) = position.split_once(':') else {
        let offset: u32 = position
            .parse()
            .map_err(|_| format!("invalid position '{position}'"))?;
        if offset > len {
            return Err(format!("offset {offset} is past the end of the file ({len})"));
        }
        return Ok(offset);
    };

    let line: u32 = line
        .parse()
        .map_err(|_| format!("invalid line in '{position}'"))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("invalid column in '{position}'"))?;
    if col == 0 {
        return Err("columns start at 1".to_owned());
    }

    let table = LineOffsetTable::build(text);
    let start = table
        .line_start_offset(line)
        .ok_or_else(|| format!("line {line} is outside the file (1..={})", table.line_count()))?;
    let end = table.line_start_offset(line + 1).unwrap_or(len);
    let line_text = text.get(start as usize..end as usize).unwrap_or_default();

    let column_offset = line_text
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(line_text.len()))
        .nth(col - 1)
        .ok_or_else(|| format!("column {col} is past the end of line {line}"))?;
    let column_offset =
        u32::try_from(column_offset).map_err(|_| "file is too large".to_owned())?;
    Ok(start + column_offset)
}
