use super::*;
use pretty_assertions::assert_eq;
use rest_ir::{BufferId, Snapshot, SnapshotVersion};

use crate::EngineConfig;

/// Request for the first hoverable token under `offset`.
fn request_at(text: &str, offset: u32) -> Option<TooltipRequest> {
    let snapshot = Snapshot::new(BufferId::new(7), SnapshotVersion::INITIAL, text);
    let tokenization = Tokenization::compute(&snapshot, &EngineConfig::default());
    let (index, hover) = tokenization
        .tokens()
        .iter()
        .enumerate()
        .find_map(|(index, token)| token.hover(offset).map(|hover| (index, hover)))?;
    Some(TooltipRequest::new(tokenization, index, hover))
}

fn tooltip_at(text: &str, offset: u32) -> Option<Tooltip> {
    builtin_tooltip(&request_at(text, offset)?)
}

#[test]
fn method_tooltip_uses_canonical_name() {
    let tooltip = tooltip_at("get https://example.com/", 1);
    assert_eq!(tooltip.map(|t| t.title), Some("GET".to_owned()));
}

#[test]
fn header_tooltip_is_documented() {
    let tooltip = tooltip_at("GET /\nContent-Type: text/plain", 8);
    let tooltip = tooltip.unwrap_or_else(|| Tooltip::new("missing", ""));
    assert_eq!(tooltip.title, "Content-Type");
    assert!(!tooltip.body.is_empty());
}

#[test]
fn unknown_header_has_no_tooltip() {
    assert_eq!(tooltip_at("GET /\nX-Custom: 1", 8), None);
}

#[test]
fn variable_definition_shows_value() {
    let tooltip = tooltip_at("@host = example.com\n", 2);
    assert_eq!(tooltip, Some(Tooltip::new("@host", "example.com")));
}

#[test]
fn empty_variable_value_is_marked() {
    let tooltip = tooltip_at("@blank =\nGET /{{blank}}\n", 16);
    assert_eq!(tooltip, Some(Tooltip::new("blank", "(empty)")));
}

#[test]
fn reference_shows_variable_value() {
    let tooltip = tooltip_at("@host = api.test\nGET https://{{host}}/", 33);
    assert_eq!(tooltip, Some(Tooltip::new("host", "api.test")));
}

#[test]
fn system_variable_is_documented() {
    let text = "GET /\nX-Id: {{$guid}}";
    let tooltip = tooltip_at(text, 15);
    assert_eq!(tooltip.map(|t| t.title), Some("$guid".to_owned()));
}

#[test]
fn request_reference_names_the_request() {
    let text = "# @name login\nPOST /login\n\n###\nGET /me\nAuthorization: {{login.response.body.token}}";
    let offset = u32::try_from(text.find("login.response").unwrap_or(0)).unwrap_or(0) + 1;
    let tooltip = tooltip_at(text, offset).unwrap_or_else(|| Tooltip::new("missing", ""));
    assert_eq!(tooltip.title, "login.response.body.token");
    assert!(tooltip.body.contains("`login`"));
}

#[test]
fn unresolved_reference_has_no_tooltip() {
    assert_eq!(tooltip_at("GET /{{nope}}", 8), None);
}

#[test]
fn display_joins_title_and_body() {
    assert_eq!(Tooltip::new("GET", "Fetch").to_string(), "GET\nFetch");
    assert_eq!(Tooltip::new("GET", "").to_string(), "GET");
}

#[test]
fn outcome_into_tooltip() {
    assert_eq!(TooltipOutcome::Cancelled.into_tooltip(), None);
    assert_eq!(
        TooltipOutcome::Resolved(Some(Tooltip::new("a", "b"))).into_tooltip(),
        Some(Tooltip::new("a", "b"))
    );
}

#[tokio::test]
async fn builtin_resolver_matches_sync_core() {
    let request = request_at("DELETE /items/1", 2);
    assert!(request.is_some());
    if let Some(request) = request {
        let expected = builtin_tooltip(&request);
        let resolved = BuiltinResolver
            .resolve(request, CancellationToken::new())
            .await;
        assert_eq!(resolved, Ok(expected));
    }
}
