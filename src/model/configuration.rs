use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Connection, Label};

/// A persisted, named robot action-sequence document.
///
/// Labels and connections are embedded, owned value sequences: they have no
/// identity or lifecycle outside this document and are always loaded and
/// saved with it in a single write. Their order is preserved as given by the
/// editor (it reflects canvas arrangement history, not execution order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Opaque store-assigned identifier, immutable after creation.
    pub id: String,
    /// Non-empty display name. Not unique in the store, but treated as a
    /// natural key by the save-state flow.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Last action option chosen in the editor. Informational only.
    #[serde(default)]
    pub selected_option: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied shape for create, update and save-state operations.
///
/// The store assigns `id` and both timestamps; everything else is replaced
/// wholesale on update, never merged field by field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigurationDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub selected_option: Option<String>,
}
