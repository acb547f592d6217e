//! Progress store port.
//!
//! Records are keyed by (user, module) and created lazily on first upsert.
//! Each call is atomic on its own; read-modify-write sequences across calls
//! must be serialized by the caller.

use crate::domain::foundation::{DomainError, ModuleId, UserId};
use crate::domain::progress::{ProgressRecord, ProgressUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Find the record for a (user, module) pair.
    ///
    /// Returns `None` if the learner has never touched the module.
    async fn get(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
    ) -> Result<Option<ProgressRecord>, DomainError>;

    /// Merge `update` onto the stored record, or onto a fresh record when
    /// none exists, and return the result.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn upsert(
        &self,
        user_id: &UserId,
        module_id: &ModuleId,
        update: ProgressUpdate,
    ) -> Result<ProgressRecord, DomainError>;

    /// All records for a learner, in no particular order.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, DomainError>;
}
