use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ConfigStore;
use crate::error::StoreError;
use crate::model::{Configuration, ConfigurationDraft};

/// In-memory reference implementation of [`ConfigStore`].
///
/// Documents are kept in a `Vec` in insertion order, which doubles as the
/// stable creation order the pagination contract requires. Lookups scan
/// linearly; this store exists for tests and embedded use, not for large
/// collections. Cloning the store clones the handle, not the data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<Vec<Configuration>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn insert(&self, draft: ConfigurationDraft) -> Result<Configuration, StoreError> {
        let now = Utc::now();
        let config = Configuration {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            labels: draft.labels,
            connections: draft.connections,
            selected_option: draft.selected_option,
            created_at: now,
            updated_at: now,
        };
        let mut docs = self.state.write().await;
        docs.push(config.clone());
        tracing::debug!(id = %config.id, "inserted configuration document");
        Ok(config)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Configuration>, StoreError> {
        let docs = self.state.read().await;
        Ok(docs.iter().find(|doc| doc.id == id).cloned())
    }

    async fn find_all(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Configuration>, StoreError> {
        let docs = self.state.read().await;
        Ok(docs.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn find_by_name_prefix(&self, query: &str) -> Result<Vec<Configuration>, StoreError> {
        let needle = query.to_lowercase();
        let docs = self.state.read().await;
        Ok(docs
            .iter()
            .filter(|doc| doc.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_exact_name(&self, name: &str) -> Result<Option<Configuration>, StoreError> {
        let docs = self.state.read().await;
        Ok(docs.iter().find(|doc| doc.name == name).cloned())
    }

    async fn update(
        &self,
        id: &str,
        draft: ConfigurationDraft,
    ) -> Result<Option<Configuration>, StoreError> {
        let mut docs = self.state.write().await;
        let Some(doc) = docs.iter_mut().find(|doc| doc.id == id) else {
            return Ok(None);
        };
        doc.name = draft.name;
        doc.description = draft.description;
        doc.labels = draft.labels;
        doc.connections = draft.connections;
        doc.selected_option = draft.selected_option;
        doc.updated_at = Utc::now();
        tracing::debug!(id = %doc.id, "replaced configuration document");
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut docs = self.state.write().await;
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() < before)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let docs = self.state.read().await;
        Ok(docs.len() as u64)
    }
}
