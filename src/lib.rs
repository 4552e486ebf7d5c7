//! # SentraCore - Robot Sequence Configuration Core
//!
//! **SentraCore** manages named robot motion-sequence documents as edited in
//! the front-end canvas: a set of positioned action blocks (labels) and the
//! directed connections between them, persisted as a single embedded
//! document per configuration.
//!
//! ## Core Workflow
//!
//! The crate is transport- and database-agnostic. An HTTP layer decodes a
//! request into a [`ConfigurationDraft`] (or a raw [`SaveStateRequest`] from
//! the editor), and a document store fulfils the [`ConfigStore`] port. The
//! primary workflow is:
//!
//! 1.  **Decode**: parse the incoming payload into a `ConfigurationDraft`.
//!     Field-level constraints (the closed category vocabulary, required
//!     fields) are enforced here by serde.
//! 2.  **Validate**: [`validate`] checks the structural invariants — unique
//!     label and connection ids, no dangling connection endpoints — and
//!     reports every violation at once.
//! 3.  **Persist**: [`ConfigService`] runs the validator before every write
//!     and delegates to the store. [`ConfigService::save_state`] is the
//!     editor's create-or-replace entry point, keyed on the configuration
//!     `name`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentra_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CoreError> {
//!     let service = ConfigService::new(MemoryStore::new());
//!
//!     let draft = ConfigurationDraft {
//!         name: "Forward Arm".to_string(),
//!         labels: vec![
//!             Label {
//!                 id: "1".to_string(),
//!                 text: "Forward".to_string(),
//!                 value: "100".to_string(),
//!                 x: 150.0,
//!                 y: 200.0,
//!                 category: Category::Move,
//!             },
//!             Label {
//!                 id: "2".to_string(),
//!                 text: "Turn Right".to_string(),
//!                 value: "90".to_string(),
//!                 x: 300.0,
//!                 y: 200.0,
//!                 category: Category::Turn,
//!             },
//!         ],
//!         connections: vec![Connection {
//!             id: "1-2".to_string(),
//!             from_id: "1".to_string(),
//!             to_id: "2".to_string(),
//!         }],
//!         ..Default::default()
//!     };
//!
//!     // Create-or-replace, keyed on the name. Saving again with the same
//!     // name replaces the document instead of creating a second one.
//!     let saved = service.save_state(draft).await?;
//!     println!("saved configuration {} ({})", saved.name, saved.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! [`ConfigurationDraft`]: model::ConfigurationDraft
//! [`SaveStateRequest`]: editor::SaveStateRequest
//! [`ConfigStore`]: store::ConfigStore
//! [`validate`]: validate::validate
//! [`ConfigService`]: service::ConfigService
//! [`ConfigService::save_state`]: service::ConfigService::save_state

pub mod editor;
pub mod error;
pub mod model;
pub mod prelude;
pub mod service;
pub mod store;
pub mod validate;
