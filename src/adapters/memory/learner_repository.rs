//! In-memory learner repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::learner::Learner;
use crate::ports::LearnerRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryLearnerRepository {
    learners: Arc<RwLock<HashMap<UserId, Learner>>>,
}

impl InMemoryLearnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `learner`.
    pub fn with_learner(learner: Learner) -> Self {
        let mut learners = HashMap::new();
        learners.insert(learner.id().clone(), learner);
        Self {
            learners: Arc::new(RwLock::new(learners)),
        }
    }
}

#[async_trait]
impl LearnerRepository for InMemoryLearnerRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Learner>, DomainError> {
        Ok(self.learners.read().await.get(id).cloned())
    }

    async fn add_points(&self, id: &UserId, points: u32) -> Result<Option<Learner>, DomainError> {
        let mut learners = self.learners.write().await;
        Ok(learners.get_mut(id).map(|learner| {
            learner.credit(points);
            learner.clone()
        }))
    }
}
