//! Common test utilities for building configuration drafts.
use sentra_core::prelude::*;

/// A label with sensible canvas defaults.
#[allow(dead_code)]
pub fn label(id: &str, category: Category) -> Label {
    Label {
        id: id.to_string(),
        text: format!("Step {id}"),
        value: "100".to_string(),
        x: 150.0,
        y: 200.0,
        category,
    }
}

#[allow(dead_code)]
pub fn connection(id: &str, from_id: &str, to_id: &str) -> Connection {
    Connection {
        id: id.to_string(),
        from_id: from_id.to_string(),
        to_id: to_id.to_string(),
    }
}

#[allow(dead_code)]
pub fn draft(name: &str, labels: Vec<Label>, connections: Vec<Connection>) -> ConfigurationDraft {
    ConfigurationDraft {
        name: name.to_string(),
        description: Some("test sequence".to_string()),
        labels,
        connections,
        selected_option: None,
    }
}

/// The two-step move/wait sequence used by several scenarios:
/// `move(1) -> wait(2)` with a single connection `c1`.
#[allow(dead_code)]
pub fn two_step_draft(name: &str) -> ConfigurationDraft {
    draft(
        name,
        vec![label("1", Category::Move), label("2", Category::Wait)],
        vec![connection("c1", "1", "2")],
    )
}
