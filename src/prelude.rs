//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types of the crate so consumers can
//! bring the whole core surface in with one `use`.

// Entity model
pub use crate::model::{Category, Configuration, ConfigurationDraft, Connection, Label};

// Editor payloads
pub use crate::editor::{EditorConnection, SaveStateRequest};

// Validation
pub use crate::validate::validate;

// Storage port and reference store
pub use crate::store::{ConfigStore, MemoryStore};

// Service
pub use crate::service::ConfigService;

// Error types
pub use crate::error::{CoreError, StoreError, ValidationFailure, Violation};
