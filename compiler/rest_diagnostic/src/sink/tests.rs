use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use rest_ir::Span;

fn diag(message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message(message)
        .at(Span::new(0, 3), "")
}

#[test]
fn test_replace_then_clear() {
    let list = ErrorList::new();
    let buffer = BufferId::new(1);

    list.replace_all(buffer, vec![diag("a"), diag("b")]);
    assert_eq!(list.len(buffer), 2);
    assert_eq!(list.diagnostics(buffer)[1].message, "b");

    list.clear_all(buffer);
    assert_eq!(list.len(buffer), 0);
    assert_eq!(
        list.events(),
        vec![
            SinkEvent::Replaced { buffer, count: 2 },
            SinkEvent::Cleared(buffer)
        ]
    );
}

#[test]
fn test_buffers_are_independent() {
    let list = ErrorList::new();
    let a = BufferId::new(1);
    let b = BufferId::new(2);

    list.replace_all(a, vec![diag("a")]);
    list.replace_all(b, vec![diag("b1"), diag("b2")]);
    list.clear_all(a);

    assert_eq!(list.len(a), 0);
    assert_eq!(list.len(b), 2);
    assert_eq!(list.total(), 2);
    assert_eq!(list.last_event(a), Some(SinkEvent::Cleared(a)));
    assert_eq!(
        list.last_event(b),
        Some(SinkEvent::Replaced { buffer: b, count: 2 })
    );
    assert_eq!(list.last_event(BufferId::new(3)), None);
}

#[test]
fn test_shared_sink_forwards() {
    let list = Arc::new(ErrorList::new());
    let sink: Arc<dyn DiagnosticsSink> = list.clone();
    sink.replace_all(BufferId::new(9), vec![diag("x")]);
    assert_eq!(list.len(BufferId::new(9)), 1);
}
