use super::*;

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawLineTag>(), 1);
}

#[test]
fn classify_line_shapes() {
    assert_eq!(RawLineTag::classify(b""), RawLineTag::Blank);
    assert_eq!(RawLineTag::classify(b"###"), RawLineTag::Separator);
    assert_eq!(RawLineTag::classify(b"### Get users"), RawLineTag::Separator);
    assert_eq!(RawLineTag::classify(b"## note"), RawLineTag::Comment);
    assert_eq!(RawLineTag::classify(b"# @name login"), RawLineTag::Comment);
    assert_eq!(RawLineTag::classify(b"// note"), RawLineTag::Comment);
    assert_eq!(RawLineTag::classify(b"@host = x"), RawLineTag::Variable);
    assert_eq!(RawLineTag::classify(b"GET /"), RawLineTag::Text);
    assert_eq!(RawLineTag::classify(b"/users"), RawLineTag::Text);
}

#[test]
fn line_end_includes_terminator() {
    let line = RawLine {
        tag: RawLineTag::Text,
        start: 10,
        content_start: 12,
        content_end: 20,
        line_end: 22,
        newline_len: 2,
    };
    assert_eq!(line.end(), 24);
    assert!(!line.is_blank());
}
