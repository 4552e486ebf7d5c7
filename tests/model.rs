//! Entity model tests: serde shapes, the closed category vocabulary and the
//! editor payload aliases.
mod common;
use common::{connection, label};
use sentra_core::prelude::*;

const STORED_DOCUMENT: &str = r#"{
    "id": "a3f1c2d4",
    "name": "Robot Movement Sequence",
    "description": "A sequence of robot movements and actions",
    "labels": [
        {"id": "1", "text": "Forward", "value": "100", "x": 150.0, "y": 200.0, "category": "move"},
        {"id": "2", "text": "Turn Right", "value": "90", "x": 300.0, "y": 200.0, "category": "turn"}
    ],
    "connections": [
        {"id": "1-2", "from_id": "1", "to_id": "2"}
    ],
    "selected_option": "move-forward",
    "created_at": "2026-08-20T09:30:00Z",
    "updated_at": "2026-08-21T14:05:00Z"
}"#;

#[test]
fn configuration_round_trips_through_json() {
    let config: Configuration = serde_json::from_str(STORED_DOCUMENT).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let reparsed: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(config, reparsed);
}

#[test]
fn label_and_connection_order_is_preserved() {
    let config: Configuration = serde_json::from_str(STORED_DOCUMENT).unwrap();
    let ids: Vec<&str> = config.labels.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(config.connections[0].from_id, "1");
    assert_eq!(config.connections[0].to_id, "2");
}

#[test]
fn category_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(Category::Move).unwrap(),
        serde_json::json!("move")
    );
    assert_eq!(Category::Wait.to_string(), "wait");
}

#[test]
fn unknown_category_is_rejected_at_the_boundary() {
    let json = r#"{"id": "1", "text": "Fly", "value": "10", "x": 0.0, "y": 0.0, "category": "fly"}"#;
    assert!(serde_json::from_str::<Label>(json).is_err());
}

#[test]
fn draft_defaults_optional_fields() {
    let draft: ConfigurationDraft = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
    assert_eq!(draft.name, "Bare");
    assert!(draft.labels.is_empty());
    assert!(draft.connections.is_empty());
    assert!(draft.description.is_none());
    assert!(draft.selected_option.is_none());
}

#[test]
fn save_state_request_accepts_editor_connection_keys() {
    // The canvas editor emits `from`/`to` instead of `from_id`/`to_id`.
    let json = r#"{
        "name": "Forward Arm",
        "labels": [
            {"id": "1", "text": "Forward", "value": "100", "x": 0.0, "y": 0.0, "category": "move"}
        ],
        "connections": [
            {"id": "c1", "from": "1", "to": "1"}
        ],
        "selected_option": "move-forward"
    }"#;
    let request: SaveStateRequest = serde_json::from_str(json).unwrap();
    let draft = ConfigurationDraft::from(request);
    assert_eq!(draft.connections, vec![connection("c1", "1", "1")]);
    assert_eq!(draft.labels, vec![{
        let mut expected = label("1", Category::Move);
        expected.text = "Forward".to_string();
        expected.x = 0.0;
        expected.y = 0.0;
        expected
    }]);
}

#[test]
fn save_state_request_also_accepts_canonical_keys() {
    let json = r#"{
        "name": "Forward Arm",
        "connections": [{"id": "c1", "from_id": "a", "to_id": "b"}]
    }"#;
    let request: SaveStateRequest = serde_json::from_str(json).unwrap();
    let draft = ConfigurationDraft::from(request);
    assert_eq!(draft.connections, vec![connection("c1", "a", "b")]);
}
