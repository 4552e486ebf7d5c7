use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed vocabulary of robot actions a label can represent.
///
/// Serialized as lowercase strings. Unknown categories are rejected when a
/// payload is deserialized, rather than stored as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Move,
    Turn,
    Grip,
    Wait,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Move => "move",
            Category::Turn => "turn",
            Category::Grip => "grip",
            Category::Wait => "wait",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positioned action block on the editor canvas.
///
/// The `id` is supplied by the editor, not the store, and must be unique
/// within the owning configuration. `value` is a text-encoded parameter
/// (a distance, an angle, a duration) and is preserved exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub text: String,
    pub value: String,
    pub x: f64,
    pub y: f64,
    pub category: Category,
}
