use serde::{Deserialize, Serialize};

/// A directed edge between two labels of the same configuration.
///
/// `from_id` and `to_id` must each reference a label id present in the
/// owning configuration; the validator rejects dangling endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
}
