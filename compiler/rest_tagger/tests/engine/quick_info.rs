//! Hover resolution and cancellation.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rest_ir::{Span, TextEdit};
use rest_tagger::{CancellationToken, QuickInfoOutcome, Tooltip};

use crate::common::{offset_of, CancellingResolver, FailingResolver, Harness, SlowResolver};

#[tokio::test]
async fn hover_over_method() {
    let harness = Harness::new("POST https://example.com/items\n");
    let outcome = harness
        .quick_info()
        .quick_info(&harness.snapshot(), 2, &CancellationToken::new())
        .await
        .unwrap();
    let item = outcome.into_item().unwrap();
    assert_eq!(item.applicable_to, Span::new(0, 4));
    assert_eq!(item.content.title, "POST");
}

#[tokio::test]
async fn caret_right_after_header_name_hovers_it() {
    let text = "GET /\nContent-Type: application/json\n";
    let harness = Harness::new(text);
    let caret = offset_of(text, ":", 0);
    let item = harness
        .quick_info()
        .quick_info(&harness.snapshot(), caret, &CancellationToken::new())
        .await
        .unwrap()
        .into_item()
        .unwrap();
    assert_eq!(item.content.title, "Content-Type");
    assert_eq!(item.applicable_to, Span::new(6, 18));
}

#[tokio::test]
async fn hover_over_plain_text_is_empty() {
    let harness = Harness::new("GET /\n\n{\"name\": \"x\"}\n");
    let outcome = harness
        .quick_info()
        .quick_info(&harness.snapshot(), 10, &CancellationToken::new())
        .await;
    assert_eq!(outcome, Ok(QuickInfoOutcome::Resolved(None)));
}

#[tokio::test]
async fn hover_follows_edits() {
    let text = "@host = api.test\nGET https://{{host}}/\n";
    let harness = Harness::new(text);
    let after = harness.edit(&[TextEdit::insert(0, "# comment\n")]);
    let caret = offset_of(after.text(), "{{host", 3);
    let item = harness
        .quick_info()
        .quick_info(&after, caret, &CancellationToken::new())
        .await
        .unwrap()
        .into_item()
        .unwrap();
    assert_eq!(item.content, Tooltip::new("host", "api.test"));
    assert_eq!(after.slice(item.applicable_to), Some("https://{{host}}/"));
    assert_eq!(harness.aggregator().current().version(), after.version());
}

#[tokio::test]
async fn hover_over_typed_header() {
    let harness = Harness::new("GET https://example.com/");
    let after = harness.edit(&[TextEdit::insert(24, "\r\nAccept: */*")]);
    let item = harness
        .quick_info()
        .quick_info(&after, 28, &CancellationToken::new())
        .await
        .unwrap()
        .into_item()
        .unwrap();
    assert_eq!(item.content.title, "Accept");
    assert_eq!(item.applicable_to, Span::new(26, 32));
}

#[tokio::test]
async fn boundary_hover_skips_token_without_content_there() {
    // `/{{a}}x` ends where `Accept` starts once the line break is undone.
    let harness = Harness::new("GET /{{a}}xAccept: */*");
    let old = harness.snapshot();
    harness.edit(&[TextEdit::insert(11, "\n")]);
    let item = harness
        .quick_info()
        .quick_info(&old, 11, &CancellationToken::new())
        .await
        .unwrap()
        .into_item()
        .unwrap();
    assert_eq!(item.content.title, "Accept");
    assert_eq!(item.applicable_to, Span::new(11, 17));
}

#[tokio::test(start_paused = true)]
async fn cancelled_hover_delivers_nothing() {
    let resolver = Arc::new(SlowResolver {
        delay: Duration::from_secs(30),
    });
    let harness = Harness::with_resolver("GET /\n", resolver);
    let source = harness.quick_info();
    let snapshot = harness.snapshot();
    let cancel = CancellationToken::new();

    let task = {
        let cancel = cancel.clone();
        tokio::spawn(async move { source.quick_info(&snapshot, 1, &cancel).await })
    };
    tokio::time::sleep(Duration::from_secs(1)).await;
    cancel.cancel();

    let outcome = task.await.unwrap();
    assert_eq!(outcome, Ok(QuickInfoOutcome::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn slow_resolver_completes_without_cancellation() {
    let resolver = Arc::new(SlowResolver {
        delay: Duration::from_secs(30),
    });
    let harness = Harness::with_resolver("GET /\n", resolver);
    let item = harness
        .quick_info()
        .quick_info(&harness.snapshot(), 1, &CancellationToken::new())
        .await
        .unwrap()
        .into_item()
        .unwrap();
    assert_eq!(item.content, Tooltip::new("slow", "finally"));
}

#[tokio::test]
async fn result_after_cancellation_is_discarded() {
    let harness = Harness::with_resolver("GET /\n", Arc::new(CancellingResolver));
    let outcome = harness
        .quick_info()
        .quick_info(&harness.snapshot(), 1, &CancellationToken::new())
        .await;
    assert_eq!(outcome, Ok(QuickInfoOutcome::Cancelled));
}

#[tokio::test]
async fn resolver_failure_shows_nothing() {
    let harness = Harness::with_resolver("GET /\n", Arc::new(FailingResolver));
    let outcome = harness
        .quick_info()
        .quick_info(&harness.snapshot(), 1, &CancellationToken::new())
        .await;
    assert_eq!(outcome, Ok(QuickInfoOutcome::Resolved(None)));
}
