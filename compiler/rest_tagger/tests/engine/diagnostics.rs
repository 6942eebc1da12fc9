//! Error tags and error list reconciliation.

use pretty_assertions::assert_eq;
use rest_diagnostic::{ErrorCode, Publish, SinkEvent};
use rest_ir::{NormalizedSpanSet, Span};
use rest_tagger::{EngineConfig, ErrorTag};

use crate::common::{Harness, BUFFER};

#[test]
fn clean_request_clears_error_list() {
    let harness = Harness::new("GET https://example.com/\r\nAccept: */*");
    assert_eq!(harness.full_parse(), Vec::<ErrorTag>::new());
    assert_eq!(harness.errors.last_event(BUFFER), Some(SinkEvent::Cleared(BUFFER)));
    assert_eq!(harness.errors.len(BUFFER), 0);
}

#[test]
fn unknown_method_is_reported() {
    let harness = Harness::new("FOO /\r\n");
    let tags = harness.full_parse();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].span, Span::new(0, 3));
    assert!(tags[0].tooltip.contains("FOO"));

    let listed = harness.errors.diagnostics(BUFFER);
    assert!(!listed.is_empty());
    assert_eq!(listed[0].code, ErrorCode::E0001);
}

#[test]
fn fixing_every_error_clears_the_list() {
    let harness = Harness::new("FOO /\nX-A: {{missing}}\n");
    harness.full_parse();
    assert_eq!(harness.errors.len(BUFFER), 2);

    harness.replace("FOO", "GET");
    harness.replace("{{missing}}", "1");
    assert_eq!(harness.full_parse(), Vec::<ErrorTag>::new());
    assert_eq!(harness.errors.len(BUFFER), 0);
    assert_eq!(harness.errors.last_event(BUFFER), Some(SinkEvent::Cleared(BUFFER)));
}

#[test]
fn visible_range_query_leaves_error_list_alone() {
    let harness = Harness::new("FOO /\n");
    let query = NormalizedSpanSet::full(harness.snapshot());
    let tags: Vec<ErrorTag> = harness.error_tagger().get_tags(&query, false).unwrap().collect();
    assert_eq!(tags.len(), 1);
    assert_eq!(harness.errors.events(), Vec::new());
}

#[test]
fn older_snapshot_cannot_overwrite_newer_result() {
    let harness = Harness::new("FOO /\n");
    let old = harness.snapshot();
    let new = harness.replace("FOO", "GET");
    let tagger = harness.error_tagger();

    assert_eq!(tagger.full_parse(&new), Ok(Publish::Cleared));
    assert_eq!(
        tagger.full_parse(&old),
        Ok(Publish::Stale {
            latest: new.version()
        })
    );
    assert_eq!(harness.errors.len(BUFFER), 0);
    assert_eq!(harness.errors.last_event(BUFFER), Some(SinkEvent::Cleared(BUFFER)));
}

#[test]
fn error_tooltip_lists_every_error_of_the_token() {
    let harness = Harness::new("GET /{{a}}/{{b}}\n");
    let tags = harness.full_parse();
    assert_eq!(tags.len(), 1);
    let lines: Vec<&str> = tags[0].tooltip.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "The variable `a` is not defined");
    assert_eq!(lines[1], "The variable `b` is not defined");
}

#[test]
fn error_tags_follow_edits() {
    let harness = Harness::new("GET /a\nBad Header: 1\n");
    harness.full_parse();
    harness.edit(&[rest_ir::TextEdit::insert(0, "\n\n")]);
    let query = NormalizedSpanSet::full(harness.snapshot());
    let tags: Vec<ErrorTag> = harness.error_tagger().get_tags(&query, false).unwrap().collect();
    assert_eq!(tags.len(), 1);
    assert_eq!(harness.snapshot().slice(tags[0].span), Some("Bad Header"));
}

#[test]
fn edited_method_is_squiggled_without_full_parse() {
    let harness = Harness::new("GET /\r\n");
    harness.replace("GET", "FOO");
    let query = NormalizedSpanSet::full(harness.snapshot());
    let tags: Vec<ErrorTag> = harness.error_tagger().get_tags(&query, false).unwrap().collect();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].span, Span::new(0, 3));
    assert_eq!(tags[0].tooltip, "Unknown HTTP method `FOO`");
    // Only a full parse touches the error list.
    assert_eq!(harness.errors.events(), Vec::new());
}

#[test]
fn error_limit_truncates_published_set() {
    let config = EngineConfig::default().with_error_limit(1);
    let harness = Harness::with_config("FOO /\nX-A: {{nope}}\n", config);
    let tagger = harness.error_tagger();
    assert_eq!(
        tagger.full_parse(&harness.snapshot()),
        Ok(Publish::Replaced {
            delivered: 1,
            truncated: 1
        })
    );
    // Squiggles are not limited.
    assert_eq!(harness.full_parse().len(), 2);
}

#[test]
fn dispose_clears_and_forgets_buffer() {
    let harness = Harness::new("FOO /\n");
    harness.full_parse();
    assert!(harness.registry.dispose(BUFFER));
    assert!(harness.registry.get(BUFFER).is_none());
    assert!(harness.registry.is_empty());
    assert_eq!(harness.errors.last_event(BUFFER), Some(SinkEvent::Cleared(BUFFER)));
    assert!(!harness.registry.dispose(BUFFER));
}

#[test]
fn full_parse_finishing_after_dispose_is_dropped() {
    let harness = Harness::new("FOO /\n");
    let snapshot = harness.snapshot();
    let tagger = harness.error_tagger();
    assert!(harness.registry.dispose(BUFFER));

    assert_eq!(tagger.full_parse(&snapshot), Ok(Publish::Retired));
    assert_eq!(harness.errors.len(BUFFER), 0);
    assert_eq!(harness.errors.last_event(BUFFER), Some(SinkEvent::Cleared(BUFFER)));

    // Opening the buffer again brings reporting back.
    harness.registry.open(&harness.buffer);
    assert!(matches!(
        harness.error_tagger().full_parse(&snapshot),
        Ok(Publish::Replaced { delivered: 1, .. })
    ));
    assert_eq!(harness.errors.len(BUFFER), 1);
}

#[test]
fn error_tagger_dispose_clears_list() {
    let harness = Harness::new("FOO /\n");
    let tagger = harness.error_tagger();
    harness.full_parse();
    tagger.dispose();
    assert_eq!(harness.errors.len(BUFFER), 0);
}
