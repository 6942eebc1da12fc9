//! Tag queries and span remapping.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rest_ir::{NormalizedSpanSet, Span, TextEdit};
use rest_lexer::TokenKind;
use rest_tagger::EngineConfig;

use crate::common::{offset_of, Harness};

#[test]
fn crlf_request_tokenizes_cleanly() {
    let harness = Harness::new("GET https://example.com/\r\nAccept: */*");
    let query = NormalizedSpanSet::full(harness.snapshot());
    let tags: Vec<_> = harness.aggregator().get_tags(&query).unwrap().collect();

    let kinds: Vec<TokenKind> = tags.iter().map(|tag| tag.token().kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Method,
            TokenKind::Url,
            TokenKind::HeaderName,
            TokenKind::Operator,
            TokenKind::HeaderValue,
        ]
    );
    assert!(tags.iter().all(|tag| tag.is_valid()));
    assert_eq!(tags[1].span(), Some(Span::new(4, 24)));
    assert_eq!(tags[2].span(), Some(Span::new(26, 32)));
}

#[test]
fn typed_header_line_is_tokenized() {
    let harness = Harness::new("GET https://example.com/");
    harness.edit(&[TextEdit::insert(24, "\r\nAccept: */*")]);
    let query = NormalizedSpanSet::full(harness.snapshot());
    let tags: Vec<_> = harness.aggregator().get_tags(&query).unwrap().collect();

    let kinds: Vec<TokenKind> = tags.iter().map(|tag| tag.token().kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Method,
            TokenKind::Url,
            TokenKind::HeaderName,
            TokenKind::Operator,
            TokenKind::HeaderValue,
        ]
    );
    assert_eq!(tags[2].span(), Some(Span::new(26, 32)));
    assert_eq!(tags[2].source().version(), harness.snapshot().version());
}

#[test]
fn typing_into_a_token_retokenizes_it() {
    let harness = Harness::new("GET /users\nAccept: */*");
    harness.edit(&[TextEdit::insert(3, "X")]);
    let query = NormalizedSpanSet::full(harness.snapshot());
    let method = harness.aggregator().get_tags(&query).unwrap().next().unwrap();
    assert_eq!(method.span(), Some(Span::new(0, 4)));
    assert_eq!(method.source().text(method.token().span), "GETX");
    assert!(!method.is_valid());
}

#[test]
fn typing_after_a_request_leaves_its_tokens_in_place() {
    let text = "GET /users\nAccept: */*";
    let harness = Harness::new(text);
    let before = harness.tags();
    harness.edit(&[TextEdit::insert(22, "\nHost: x")]);
    let after = harness.tags();
    assert_eq!(after.len(), before.len() + 3);
    assert_eq!(after[..before.len()], before[..]);
}

#[test]
fn growing_a_token_shifts_the_ones_after_it() {
    let harness = Harness::new("GET /users\nAccept: */*");
    harness.replace("/users", "/people");
    let tags = harness.tags();
    assert_eq!(tags[1], (Span::new(4, 11), "/people".to_owned()));
    assert_eq!(tags[2], (Span::new(12, 18), "Accept".to_owned()));
}

#[test]
fn queries_after_several_edits_see_the_latest_text() {
    let harness = Harness::new("@host = example.com\nGET https://{{host}}/\n");
    harness.edit(&[TextEdit::insert(0, "# hi\n")]);
    harness.replace("{{host}}/", "{{host}}/users");
    let tags = harness.tags();

    let snapshot = harness.snapshot();
    assert_eq!(harness.aggregator().current().version(), snapshot.version());
    let url = tags
        .iter()
        .find(|(_, text)| text == "https://{{host}}/users")
        .unwrap();
    assert_eq!(snapshot.slice(url.0), Some("https://{{host}}/users"));
}

#[test]
fn deleting_a_token_interior_never_yields_a_broken_span() {
    let text = "GET /\nX-Trace: abcdef\n";
    let harness = Harness::new(text);
    let value = offset_of(text, "abcdef", 0);
    // Keep `a` and `f`, drop everything between.
    let after = harness.edit(&[TextEdit::delete(Span::new(value + 1, value + 5))]);
    let tags = harness.tags();
    assert!(tags.contains(&(Span::new(value, value + 2), "af".to_owned())));
    assert!(tags.iter().all(|(span, _)| span.start <= span.end && span.end <= after.len()));

    harness.edit(&[TextEdit::delete(Span::new(value, value + 2))]);
    let tags = harness.tags();
    assert!(tags.iter().all(|(_, text)| text != "abcdef" && text != "af"));
}

#[test]
fn older_snapshot_is_served_by_remapping_the_cache() {
    let text = "GET /\nAccept: */*\n";
    let harness = Harness::new(text);
    let old = harness.snapshot();
    let accept = offset_of(text, "Accept", 0);
    harness.edit(&[TextEdit::insert(accept, "X-Trace: abcdef\n")]);

    let query = NormalizedSpanSet::full(old.clone());
    let tags: Vec<_> = harness.aggregator().get_tags(&query).unwrap().collect();
    assert!(tags.iter().all(|tag| tag.source().version() > old.version()));
    assert!(tags.iter().all(|tag| tag.version() == old.version()));

    let header = tags
        .iter()
        .find(|tag| tag.source().text(tag.token().span) == "Accept")
        .and_then(|tag| tag.span());
    assert_eq!(header, Some(Span::new(accept, accept + 6)));
    // Tokens of the inserted line have no text in the old snapshot.
    for tag in &tags {
        let span = tag.span().unwrap();
        assert!(span.end <= old.len());
        if !span.is_empty() {
            assert_eq!(old.slice(span), Some(tag.source().text(tag.token().span)));
        }
    }
}

#[test]
fn short_history_falls_back_to_tokenizing() {
    let config = EngineConfig::default().with_history_limit(1);
    let harness = Harness::with_config("GET /a\n", config);
    let old = harness.snapshot();
    harness.replace("/a", "/ab");
    harness.replace("GET", "PUT");
    // The old snapshot is two batches behind with only one recorded.
    assert_eq!(
        harness.tags_of(&old),
        vec![
            (Span::new(0, 3), "GET".to_owned()),
            (Span::new(4, 6), "/a".to_owned())
        ]
    );
    assert_eq!(harness.aggregator().current().version(), harness.snapshot().version());
}

#[test]
fn multi_span_query_is_ordered_and_deduplicated() {
    let text = "GET /a\nAccept: */*\nHost: x\n";
    let harness = Harness::new(text);
    let snapshot = harness.snapshot();
    let accept = offset_of(text, "Accept", 0);
    let host = offset_of(text, "Host", 0);
    let query = NormalizedSpanSet::new(
        snapshot,
        [
            Span::new(host, host + 2),
            Span::new(accept, accept + 1),
            Span::new(accept + 2, accept + 3),
        ],
    );
    let kinds: Vec<(TokenKind, Option<Span>)> = harness
        .aggregator()
        .get_tags(&query)
        .unwrap()
        .map(|tag| (tag.token().kind, tag.span()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::HeaderName, Some(Span::new(accept, accept + 6))),
            (TokenKind::HeaderName, Some(Span::new(host, host + 4))),
        ]
    );
}

#[test]
fn tags_are_restartable() {
    let harness = Harness::new("GET /a\nAccept: */*");
    let query = NormalizedSpanSet::full(harness.snapshot());
    let aggregator = harness.aggregator();
    let first: Vec<_> = aggregator.get_tags(&query).unwrap().take(1).collect();
    let all: Vec<_> = aggregator.get_tags(&query).unwrap().collect();
    assert_eq!(first.len(), 1);
    assert_eq!(all.len(), 5);
}

#[derive(Clone, Debug)]
enum Edit {
    Insert { at: usize, text: String },
    Delete { at: usize, len: usize },
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<usize>(), "[a-z {}:/\n]{0,4}").prop_map(|(at, text)| Edit::Insert { at, text }),
        (any::<usize>(), 0usize..6).prop_map(|(at, len)| Edit::Delete { at, len }),
    ]
}

fn apply_edits(harness: &Harness, edits: Vec<Edit>) {
    for edit in edits {
        let len = harness.snapshot().text().len();
        let edit = match edit {
            Edit::Insert { at, text } => {
                let at = u32::try_from(at % (len + 1)).unwrap();
                TextEdit::insert(at, text)
            }
            Edit::Delete { at, len: count } => {
                let at = at % (len + 1);
                let end = (at + count).min(len);
                TextEdit::delete(Span::new(u32::try_from(at).unwrap(), u32::try_from(end).unwrap()))
            }
        };
        harness.edit(&[edit]);
    }
}

const START: &str = "@v = 1\nGET https://x.test/{{v}}\nAccept: */*\n\n{\"a\": 1}\n";

proptest! {
    /// After any edits, tags of the current snapshot are exactly what a
    /// fresh tokenization of its text yields.
    #[test]
    fn edited_snapshot_matches_fresh_tokenization(edits in prop::collection::vec(edit_strategy(), 1..6)) {
        let harness = Harness::new(START);
        apply_edits(&harness, edits);

        let snapshot = harness.snapshot();
        let fresh = Harness::new(snapshot.text());
        prop_assert_eq!(harness.tags(), fresh.tags());
        for (span, text) in harness.tags() {
            prop_assert_eq!(snapshot.slice(span), Some(text.as_str()));
        }
    }

    /// Remapping the latest tokens back onto the first snapshot stays in
    /// bounds and in document order.
    #[test]
    fn remapped_tags_stay_in_bounds(edits in prop::collection::vec(edit_strategy(), 1..6)) {
        let harness = Harness::new(START);
        let old = harness.snapshot();
        apply_edits(&harness, edits);

        let mut previous_end = 0;
        for (span, _) in harness.tags_of(&old) {
            prop_assert!(span.end <= old.len());
            prop_assert!(span.start >= previous_end || span.is_empty());
            if !span.is_empty() {
                previous_end = span.end;
            }
        }
    }
}
