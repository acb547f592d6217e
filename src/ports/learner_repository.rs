//! Learner repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::learner::Learner;
use async_trait::async_trait;

/// Repository port for learners and their point totals.
#[async_trait]
pub trait LearnerRepository: Send + Sync {
    /// Find a learner by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Learner>, DomainError>;

    /// Add `points` to the learner's lifetime total.
    ///
    /// Returns the updated learner, or `None` when the id is unknown, in which
    /// case nothing is written.
    async fn add_points(&self, id: &UserId, points: u32) -> Result<Option<Learner>, DomainError>;
}
