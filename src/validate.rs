use ahash::AHashSet;

use crate::error::{ValidationFailure, Violation};
use crate::model::ConfigurationDraft;

/// Checks every structural invariant of a configuration before it is allowed
/// to reach the store.
///
/// All violations are collected, not just the first, so a single response can
/// name every problem. Runs in O(L + C) for L labels and C connections: one
/// set-based pass over the labels, one over the connections. Self-loops
/// (`from_id == to_id`) are permitted.
pub fn validate(draft: &ConfigurationDraft) -> Result<(), ValidationFailure> {
    let mut violations = Vec::new();

    if draft.name.trim().is_empty() {
        violations.push(Violation::EmptyName);
    }

    let mut label_ids: AHashSet<&str> = AHashSet::with_capacity(draft.labels.len());
    for (index, label) in draft.labels.iter().enumerate() {
        if label.text.is_empty() {
            violations.push(Violation::EmptyLabelText { index });
        }
        if !label_ids.insert(label.id.as_str()) {
            violations.push(Violation::DuplicateLabelId {
                index,
                id: label.id.clone(),
            });
        }
    }

    let mut connection_ids: AHashSet<&str> = AHashSet::with_capacity(draft.connections.len());
    for (index, connection) in draft.connections.iter().enumerate() {
        if !connection_ids.insert(connection.id.as_str()) {
            violations.push(Violation::DuplicateConnectionId {
                index,
                id: connection.id.clone(),
            });
        }
        if !label_ids.contains(connection.from_id.as_str()) {
            violations.push(Violation::DanglingFrom {
                index,
                id: connection.from_id.clone(),
            });
        }
        if !label_ids.contains(connection.to_id.as_str()) {
            violations.push(Violation::DanglingTo {
                index,
                id: connection.to_id.clone(),
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(violations))
    }
}
