//! Shared tokenizations under concurrent readers.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rest_ir::{NormalizedSpanSet, Span};
use rest_tagger::CancellationToken;

use crate::common::Harness;

const TEXT: &str = "@token = abc\n\
                    GET https://example.com/{{token}}\n\
                    Authorization: Bearer {{token}}\n\
                    Accept: */*\n";

#[test]
fn readers_of_one_snapshot_share_one_tokenization() {
    let harness = Harness::new(TEXT);
    let snapshot = harness.snapshot();
    let aggregator = harness.aggregator();

    let results: Vec<(Vec<Span>, usize)> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let aggregator = Arc::clone(&aggregator);
                let snapshot = snapshot.clone();
                scope.spawn(move || {
                    let query = NormalizedSpanSet::full(snapshot);
                    let tags: Vec<_> = aggregator.get_tags(&query).unwrap().collect();
                    let source = Arc::as_ptr(tags[0].source()) as usize;
                    (tags.iter().filter_map(|tag| tag.span()).collect(), source)
                })
            })
            .collect();
        workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    let (first_spans, first_source) = &results[0];
    for (spans, source) in &results {
        assert_eq!(spans, first_spans);
        assert_eq!(source, first_source);
    }
}

#[test]
fn error_tagging_and_hover_share_the_aggregator() {
    let harness = Harness::new(TEXT);
    let tagger = harness.error_tagger();
    let quick_info = harness.quick_info();
    let before = harness.aggregator().current();

    assert_eq!(harness.full_parse().len(), 0);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let item = runtime
        .block_on(quick_info.quick_info(&harness.snapshot(), 1, &CancellationToken::new()))
        .unwrap()
        .into_item();
    assert!(item.is_some());

    tagger.dispose();
    assert!(Arc::ptr_eq(&before, &harness.aggregator().current()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_hovers_resolve_independently() {
    let harness = Harness::new(TEXT);
    let snapshot = harness.snapshot();
    let positions = [1u32, 5, 16, 45];

    let tasks: Vec<_> = positions
        .iter()
        .map(|&position| {
            let source = harness.quick_info();
            let snapshot = snapshot.clone();
            tokio::spawn(async move {
                source
                    .quick_info(&snapshot, position, &CancellationToken::new())
                    .await
            })
        })
        .collect();

    let mut resolved = 0;
    for task in tasks {
        if task.await.unwrap().unwrap().into_item().is_some() {
            resolved += 1;
        }
    }
    assert_eq!(resolved, positions.len());
}
