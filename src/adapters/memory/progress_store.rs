//! In-memory progress store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ModuleId, UserId};
use crate::domain::progress::{ProgressRecord, ProgressUpdate};
use crate::ports::ProgressStore;

type ProgressKey = (UserId, ModuleId);

/// Progress records held in a map behind an async lock.
///
/// Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressStore {
    records: Arc<RwLock<HashMap<ProgressKey, ProgressRecord>>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn get(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<Option<ProgressRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&(user_id.clone(), module_id.clone())).cloned())
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
        update: ProgressUpdate,
    ) -> Result<ProgressRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .entry((user_id.clone(), module_id.clone()))
            .or_insert_with(|| ProgressRecord::new(user_id.clone(), module_id.clone()));
        record.apply(&update);
        Ok(record.clone())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect())
    }
}
