use itertools::Itertools;
use thiserror::Error;

/// A single violated field or structural invariant, with the path of the
/// offending field encoded in its message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("name: must not be empty")]
    EmptyName,

    #[error("labels[{index}].text: must not be empty")]
    EmptyLabelText { index: usize },

    #[error("labels[{index}].id: duplicate label id '{id}'")]
    DuplicateLabelId { index: usize, id: String },

    #[error("connections[{index}].id: duplicate connection id '{id}'")]
    DuplicateConnectionId { index: usize, id: String },

    #[error("connections[{index}].from_id: references unknown label '{id}'")]
    DanglingFrom { index: usize, id: String },

    #[error("connections[{index}].to_id: references unknown label '{id}'")]
    DanglingTo { index: usize, id: String },

    #[error("offset: must be non-negative, got {value}")]
    NegativeOffset { value: i64 },

    #[error("limit: must be positive, got {value}")]
    NonPositiveLimit { value: i64 },
}

/// Every violation found in one validation pass over a configuration.
///
/// Validation never stops at the first problem, so the editor can report the
/// complete list in a single response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid configuration: {}", .violations.iter().join("; "))]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Whether a specific violation is part of this failure.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

/// Errors raised by the document store behind the [`ConfigStore`] port.
///
/// [`ConfigStore`]: crate::store::ConfigStore
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    #[error("document store write failed: {0}")]
    WriteFailed(String),
}

/// Service-level error taxonomy returned to the transport boundary.
///
/// `Validation` maps to a 400-class response, `NotFound` to 404 and `Store`
/// to 500. Each variant carries a human-readable message naming every
/// violated field where applicable.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("configuration '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
