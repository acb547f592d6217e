//! GetStatsHandler - Query handler for a learner's lifetime points.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::learner::LearnerError;
use crate::ports::LearnerRepository;

/// Lifetime statistics for a learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerStats {
    pub total_points: u64,
}

pub struct GetStatsHandler {
    learners: Arc<dyn LearnerRepository>,
}

impl GetStatsHandler {
    pub fn new(learners: Arc<dyn LearnerRepository>) -> Self {
        Self { learners }
    }

    /// Unknown learners report zero points.
    pub async fn handle(&self, user_id: &UserId) -> Result<LearnerStats, LearnerError> {
        let total_points = self
            .learners
            .find_by_id(user_id)
            .await?
            .map_or(0, |learner| learner.total_points());
        Ok(LearnerStats { total_points })
    }
}
