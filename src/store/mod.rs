use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Configuration, ConfigurationDraft};

mod memory;

pub use memory::MemoryStore;

/// Abstract contract for the document store the configuration service
/// depends on.
///
/// Absence is expressed as `Option` / `false` at this level; the service
/// maps it to [`CoreError::NotFound`]. Each call is an independent,
/// per-document atomic operation — the port defines no cross-call
/// transactions, and concurrency discipline on the shared connection is the
/// implementor's responsibility.
///
/// [`CoreError::NotFound`]: crate::error::CoreError::NotFound
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Persists a new configuration, assigning a fresh id and setting both
    /// timestamps to the current instant.
    async fn insert(&self, draft: ConfigurationDraft) -> Result<Configuration, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Configuration>, StoreError>;

    /// A page of configurations in stable creation order. `offset` skips
    /// leading documents, `limit` bounds the page size.
    async fn find_all(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Configuration>, StoreError>;

    /// Case-insensitive substring match on `name`, in stable creation order.
    async fn find_by_name_prefix(&self, query: &str) -> Result<Vec<Configuration>, StoreError>;

    /// First configuration whose `name` matches exactly. Used by the
    /// save-state flow to upsert by name.
    async fn find_by_exact_name(&self, name: &str) -> Result<Option<Configuration>, StoreError>;

    /// Full replacement of the mutable fields of an existing document,
    /// preserving `id` and `created_at` and refreshing `updated_at`.
    async fn update(
        &self,
        id: &str,
        draft: ConfigurationDraft,
    ) -> Result<Option<Configuration>, StoreError>;

    /// Removes a document. Returns whether one existed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}
