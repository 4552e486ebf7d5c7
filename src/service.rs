use crate::error::{CoreError, ValidationFailure, Violation};
use crate::model::{Configuration, ConfigurationDraft};
use crate::store::ConfigStore;
use crate::validate::validate;

/// Orchestrates configuration persistence: every write is validated first,
/// then handed to the store, and store-level absence is mapped to
/// [`CoreError::NotFound`].
///
/// The service holds no state of its own beyond the store handle. Operations
/// on different configuration ids are independent; for operations racing on
/// the same id or name the service relies on the store's per-document
/// atomicity (see [`ConfigService::save_state`] for the known name race).
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access to the underlying store, e.g. to share it with another service.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and persists a new configuration.
    pub async fn create(&self, draft: ConfigurationDraft) -> Result<Configuration, CoreError> {
        self.check(&draft)?;
        let created = self.store.insert(draft).await?;
        tracing::info!(id = %created.id, name = %created.name, "created configuration");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<Configuration, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    /// A page of configurations in stable creation order.
    ///
    /// Rejects `offset < 0` and `limit <= 0` before touching the store.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Configuration>, CoreError> {
        let mut violations = Vec::new();
        if offset < 0 {
            violations.push(Violation::NegativeOffset { value: offset });
        }
        if limit <= 0 {
            violations.push(Violation::NonPositiveLimit { value: limit });
        }
        if !violations.is_empty() {
            return Err(ValidationFailure::new(violations).into());
        }
        Ok(self.store.find_all(offset as usize, limit as usize).await?)
    }

    /// Validates the draft and replaces the stored document wholesale.
    pub async fn update(
        &self,
        id: &str,
        draft: ConfigurationDraft,
    ) -> Result<Configuration, CoreError> {
        self.check(&draft)?;
        let updated = self
            .store
            .update(id, draft)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        tracing::info!(id = %updated.id, name = %updated.name, "updated configuration");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        if self.store.delete(id).await? {
            tracing::info!(id, "deleted configuration");
            Ok(())
        } else {
            Err(CoreError::NotFound(id.to_string()))
        }
    }

    /// Case-insensitive substring search on `name`.
    ///
    /// An empty query returns an empty sequence rather than every document,
    /// so a blank search box in the editor never triggers a full scan.
    pub async fn search(&self, query: &str) -> Result<Vec<Configuration>, CoreError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.find_by_name_prefix(query).await?)
    }

    pub async fn count(&self) -> Result<u64, CoreError> {
        Ok(self.store.count().await?)
    }

    /// Create-or-replace keyed on `name` rather than id.
    ///
    /// Lets the editor repeatedly save the same named sequence without
    /// tracking an id client-side: an existing document with the same name is
    /// replaced in full (keeping its id and `created_at`), otherwise a new
    /// one is created. Two legitimately different configurations sharing a
    /// name will collide — a documented trade-off of the natural key. Two
    /// concurrent saves of a new name may both observe "not found" and both
    /// create; subsequent saves converge on last-writer-wins.
    pub async fn save_state(&self, draft: ConfigurationDraft) -> Result<Configuration, CoreError> {
        self.check(&draft)?;
        match self.store.find_by_exact_name(&draft.name).await? {
            Some(existing) => {
                let updated = self
                    .store
                    .update(&existing.id, draft)
                    .await?
                    .ok_or(CoreError::NotFound(existing.id))?;
                tracing::info!(id = %updated.id, name = %updated.name, "save-state replaced configuration");
                Ok(updated)
            }
            None => {
                let created = self.store.insert(draft).await?;
                tracing::info!(id = %created.id, name = %created.name, "save-state created configuration");
                Ok(created)
            }
        }
    }

    fn check(&self, draft: &ConfigurationDraft) -> Result<(), CoreError> {
        if let Err(failure) = validate(draft) {
            tracing::warn!(
                name = %draft.name,
                violations = failure.violations.len(),
                "rejected invalid configuration"
            );
            return Err(failure.into());
        }
        Ok(())
    }
}
