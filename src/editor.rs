use serde::Deserialize;

use crate::model::{ConfigurationDraft, Connection, Label};

/// Connection as emitted by the canvas editor, which names its endpoints
/// `from` and `to` instead of `from_id`/`to_id`.
#[derive(Debug, Deserialize, Clone)]
pub struct EditorConnection {
    pub id: String,
    #[serde(alias = "from")]
    pub from_id: String,
    #[serde(alias = "to")]
    pub to_id: String,
}

impl From<EditorConnection> for Connection {
    fn from(edge: EditorConnection) -> Self {
        Connection {
            id: edge.id,
            from_id: edge.from_id,
            to_id: edge.to_id,
        }
    }
}

/// Full editor snapshot sent when the user presses "save".
///
/// The editor does not track document ids; the snapshot is keyed on `name`
/// and fed through [`ConfigService::save_state`].
///
/// [`ConfigService::save_state`]: crate::service::ConfigService::save_state
#[derive(Debug, Deserialize)]
pub struct SaveStateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub connections: Vec<EditorConnection>,
    #[serde(default)]
    pub selected_option: Option<String>,
}

impl From<SaveStateRequest> for ConfigurationDraft {
    fn from(request: SaveStateRequest) -> Self {
        ConfigurationDraft {
            name: request.name,
            description: request.description,
            labels: request.labels,
            connections: request.connections.into_iter().map(Into::into).collect(),
            selected_option: request.selected_option,
        }
    }
}
