use super::*;

#[test]
fn test_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
}

#[test]
fn test_lf_lines() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 5), (1, 6));
    assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
}

#[test]
fn test_crlf_counts_once() {
    let source = "GET /\r\nAccept: */*";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 2);
    assert_eq!(table.line_start_offset(2), Some(7));
    // the \n of a \r\n pair still belongs to line 1
    assert_eq!(table.line_from_offset(6), 1);
}

#[test]
fn test_lone_cr() {
    let source = "a\rb\r\rc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.offset_to_line_col(source, 5), (4, 1));
}

#[test]
fn test_columns_count_chars() {
    let source = "X-Name: é{{x}}";
    let table = LineOffsetTable::build(source);
    // the first `{` sits after the two-byte `é`
    assert_eq!(table.offset_to_line_col(source, 10), (1, 10));
}

#[test]
fn test_line_start_offset_bounds() {
    let table = LineOffsetTable::build("a\nb");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.line_start_offset(3), None);
}

#[test]
fn test_span_start() {
    let source = "GET /\nHost: {{host}}";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.span_start(source, Span::new(12, 20)), (2, 7));
}
