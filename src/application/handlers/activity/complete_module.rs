//! CompleteModuleHandler - Command handler for finishing a module.
//!
//! Marks the learner's progress record completed, credits the record's points
//! to the learner's lifetime total and returns a summary pointing at the next
//! module in the category.
//!
//! Completion is not idempotent unless configured: every call credits the
//! stored points again.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ModuleId};
use crate::domain::progress::{ActivityError, ModuleCompletionSummary, ProgressUpdate};
use crate::ports::{ContentCatalog, LearnerRepository, ProgressStore};

use super::ProgressLocks;

/// Command to complete a module.
#[derive(Debug, Clone)]
pub struct CompleteModuleCommand {
    pub module_id: ModuleId,
}

/// Result of completing a module.
#[derive(Debug, Clone)]
pub struct CompleteModuleResult {
    pub summary: ModuleCompletionSummary,
    /// Points added to the learner's total by this call.
    pub points_credited: u32,
}

pub struct CompleteModuleHandler {
    catalog: Arc<dyn ContentCatalog>,
    progress_store: Arc<dyn ProgressStore>,
    learners: Arc<dyn LearnerRepository>,
    locks: ProgressLocks,
    idempotent: bool,
}

impl CompleteModuleHandler {
    pub fn new(
        catalog: Arc<dyn ContentCatalog>,
        progress_store: Arc<dyn ProgressStore>,
        learners: Arc<dyn LearnerRepository>,
        locks: ProgressLocks,
    ) -> Self {
        Self {
            catalog,
            progress_store,
            learners,
            locks,
            idempotent: false,
        }
    }

    /// Credit points only on the first completion of a record.
    pub fn with_idempotent_completion(mut self, idempotent: bool) -> Self {
        self.idempotent = idempotent;
        self
    }

    pub async fn handle(
        &self,
        cmd: CompleteModuleCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteModuleResult, ActivityError> {
        // 1. Find the module
        let module = self
            .catalog
            .find_module(&cmd.module_id)
            .await?
            .ok_or_else(|| ActivityError::module_not_found(cmd.module_id.clone()))?;

        let user_id = &metadata.user_id;
        let _guard = self.locks.acquire(user_id, &cmd.module_id).await;

        // 2. Finalize progress; an absent record completes with zero counters
        let was_completed = self
            .progress_store
            .get(user_id, &cmd.module_id)
            .await?
            .is_some_and(|record| record.is_completed());
        let record = self
            .progress_store
            .upsert(user_id, &cmd.module_id, ProgressUpdate::completed())
            .await?;

        // 3. Credit the learner
        let points_credited = if self.idempotent && was_completed {
            tracing::debug!(
                user_id = %user_id,
                module_id = %cmd.module_id,
                "Module already completed, skipping credit"
            );
            0
        } else {
            if self
                .learners
                .add_points(user_id, record.points_earned())
                .await?
                .is_none()
            {
                tracing::warn!(user_id = %user_id, "Learner not found, points not credited");
            }
            record.points_earned()
        };

        // 4. Next module; a failed lookup only drops the pointer
        let next_module_id = match self.catalog.next_module(&cmd.module_id).await {
            Ok(next) => next.map(|m| m.id),
            Err(err) => {
                tracing::warn!(module_id = %cmd.module_id, error = %err, "Next module lookup failed");
                None
            }
        };

        tracing::info!(
            user_id = %user_id,
            module_id = %cmd.module_id,
            points_credited,
            correlation_id = %metadata.correlation_id(),
            "Module completed"
        );

        Ok(CompleteModuleResult {
            summary: ModuleCompletionSummary::from_record(&module, &record, next_module_id),
            points_credited,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        embedded_catalog, InMemoryContentCatalog, InMemoryLearnerRepository,
        InMemoryProgressStore,
    };
    use crate::domain::foundation::{Difficulty, DomainError, ErrorCode, UserId};
    use crate::domain::learner::Learner;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Fixture {
        store: Arc<InMemoryProgressStore>,
        learners: Arc<InMemoryLearnerRepository>,
        catalog: Arc<InMemoryContentCatalog>,
    }

    impl Fixture {
        fn new() -> Self {
            let learner = Learner::new(user(), "learner", "Young Learner", None).unwrap();
            Self {
                store: Arc::new(InMemoryProgressStore::new()),
                learners: Arc::new(InMemoryLearnerRepository::with_learner(learner)),
                catalog: Arc::new(InMemoryContentCatalog::new(embedded_catalog().unwrap()).unwrap()),
            }
        }

        fn handler(&self) -> CompleteModuleHandler {
            CompleteModuleHandler::new(
                self.catalog.clone(),
                self.store.clone(),
                self.learners.clone(),
                ProgressLocks::new(),
            )
        }

        async fn seed_progress(&self, module: &str, points: u32, correct: u32) {
            self.store
                .upsert(
                    &user(),
                    &module.parse().unwrap(),
                    ProgressUpdate {
                        questions_completed: Some(5),
                        correct_answers: Some(correct),
                        points_earned: Some(points),
                        current_difficulty: Some(Difficulty::Medium),
                        time_spent_seconds: Some(41.5),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        async fn total_points(&self) -> u64 {
            self.learners
                .find_by_id(&user())
                .await
                .unwrap()
                .unwrap()
                .total_points()
        }
    }

    fn user() -> UserId {
        UserId::new("default-user").unwrap()
    }

    fn cmd(module: &str) -> CompleteModuleCommand {
        CompleteModuleCommand {
            module_id: module.parse().unwrap(),
        }
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(user())
    }

    #[tokio::test]
    async fn completion_summarizes_and_credits_points() {
        let f = Fixture::new();
        f.seed_progress("mod-math-1", 60, 5).await;

        let result = f.handler().handle(cmd("mod-math-1"), metadata()).await.unwrap();

        let summary = result.summary;
        assert_eq!(summary.module_title, "Counting Fun");
        assert_eq!(summary.total_questions, 5);
        assert_eq!(summary.correct_answers, 5);
        assert_eq!(summary.total_points, 60);
        assert_eq!(summary.time_spent, 41.5);
        assert_eq!(summary.difficulty_achieved, Difficulty::Medium);
        assert_eq!(summary.next_module_id.unwrap().as_str(), "mod-math-2");
        assert_eq!(result.points_credited, 60);
        assert_eq!(f.total_points().await, 60);
    }

    #[tokio::test]
    async fn completion_without_progress_is_zero_score() {
        let f = Fixture::new();
        let result = f.handler().handle(cmd("mod-science-2"), metadata()).await.unwrap();

        assert_eq!(result.summary.total_points, 0);
        assert_eq!(result.summary.correct_answers, 0);
        assert_eq!(result.summary.difficulty_achieved, Difficulty::Easy);

        let record = f
            .store
            .get(&user(), &"mod-science-2".parse().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(record.is_completed());
    }

    #[tokio::test]
    async fn last_module_has_no_next() {
        let f = Fixture::new();
        let result = f.handler().handle(cmd("mod-coding-4"), metadata()).await.unwrap();
        assert!(result.summary.next_module_id.is_none());
    }

    #[tokio::test]
    async fn repeated_completion_credits_again() {
        let f = Fixture::new();
        f.seed_progress("mod-math-1", 60, 5).await;
        let handler = f.handler();

        handler.handle(cmd("mod-math-1"), metadata()).await.unwrap();
        handler.handle(cmd("mod-math-1"), metadata()).await.unwrap();

        assert_eq!(f.total_points().await, 120);
    }

    #[tokio::test]
    async fn idempotent_completion_credits_once() {
        let f = Fixture::new();
        f.seed_progress("mod-math-1", 60, 5).await;
        let handler = f.handler().with_idempotent_completion(true);

        let first = handler.handle(cmd("mod-math-1"), metadata()).await.unwrap();
        let second = handler.handle(cmd("mod-math-1"), metadata()).await.unwrap();

        assert_eq!(first.points_credited, 60);
        assert_eq!(second.points_credited, 0);
        assert_eq!(second.summary.total_points, 60);
        assert_eq!(f.total_points().await, 60);
    }

    #[tokio::test]
    async fn unknown_module_is_not_found_and_writes_nothing() {
        let f = Fixture::new();
        let err = f.handler().handle(cmd("mod-nope"), metadata()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ModuleNotFound);
        assert!(f.store.is_empty().await);
        assert_eq!(f.total_points().await, 0);
    }

    #[tokio::test]
    async fn unknown_learner_still_completes() {
        let f = Fixture::new();
        let stranger = CommandMetadata::new(UserId::new("someone-else").unwrap());
        let result = f.handler().handle(cmd("mod-math-1"), stranger).await.unwrap();
        assert_eq!(result.summary.module_id.as_str(), "mod-math-1");
    }

    struct RecordingLearners {
        credits: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl LearnerRepository for RecordingLearners {
        async fn find_by_id(&self, _: &UserId) -> Result<Option<Learner>, DomainError> {
            Ok(None)
        }
        async fn add_points(&self, _: &UserId, points: u32) -> Result<Option<Learner>, DomainError> {
            self.credits.lock().unwrap().push(points);
            Ok(None)
        }
    }

    #[tokio::test]
    async fn credits_stored_points_not_client_values() {
        let f = Fixture::new();
        f.seed_progress("mod-math-2", 45, 3).await;
        let learners = Arc::new(RecordingLearners {
            credits: Mutex::new(Vec::new()),
        });
        let handler = CompleteModuleHandler::new(
            f.catalog.clone(),
            f.store.clone(),
            learners.clone(),
            ProgressLocks::new(),
        );

        handler.handle(cmd("mod-math-2"), metadata()).await.unwrap();
        assert_eq!(*learners.credits.lock().unwrap(), vec![45]);
    }
}
