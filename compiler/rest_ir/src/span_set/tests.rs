use super::*;
use crate::{BufferId, SnapshotVersion};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn snapshot() -> Snapshot {
    Snapshot::new(BufferId::new(7), SnapshotVersion::INITIAL, "x".repeat(128))
}

#[test]
fn test_sorts_and_merges() {
    let set = NormalizedSpanSet::new(
        snapshot(),
        [Span::new(20, 30), Span::new(0, 5), Span::new(25, 40)],
    );
    assert_eq!(set.spans(), &[Span::new(0, 5), Span::new(20, 40)]);
}

#[test]
fn test_merges_touching_and_duplicates() {
    let set = NormalizedSpanSet::new(
        snapshot(),
        [Span::new(0, 5), Span::new(5, 9), Span::new(0, 5)],
    );
    assert_eq!(set.spans(), &[Span::new(0, 9)]);
}

#[test]
fn test_keeps_caret_points() {
    let set = NormalizedSpanSet::new(snapshot(), [Span::point(12), Span::new(30, 31)]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.spans()[0], Span::point(12));
}

#[test]
fn test_point_inside_range_is_absorbed() {
    let set = NormalizedSpanSet::new(snapshot(), [Span::new(10, 20), Span::point(15)]);
    assert_eq!(set.spans(), &[Span::new(10, 20)]);
}

#[test]
fn test_full_covers_snapshot() {
    let set = NormalizedSpanSet::full(snapshot());
    assert_eq!(set.spans(), &[Span::new(0, 128)]);
    assert_eq!(set.snapshot().buffer(), BufferId::new(7));
}

#[test]
fn test_empty_set() {
    let set = NormalizedSpanSet::new(snapshot(), []);
    assert!(set.is_empty());
    assert_eq!((&set).into_iter().count(), 0);
}

proptest! {
    #[test]
    fn normalized_spans_are_sorted_and_disjoint(
        raw in proptest::collection::vec((0u32..100, 0u32..20), 0..16)
    ) {
        let spans = raw.into_iter().map(|(start, len)| Span::with_len(start, len));
        let set = NormalizedSpanSet::new(snapshot(), spans);
        for pair in set.spans().windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }
}
