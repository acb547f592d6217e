//! SubmitAnswerHandler - Command handler for grading one answer.
//!
//! Grades the submission, then folds the outcome into the learner's progress
//! for the module named in the command: counters, streak, points, time and
//! the adapted difficulty.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, Difficulty, ModuleId, QuestionId};
use crate::domain::progress::{grade, ActivityError, GradeOutcome, ProgressRecord};
use crate::ports::{ContentCatalog, ProgressStore};

use super::ProgressLocks;

/// Command to submit an answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    /// Module whose progress record is updated.
    pub module_id: ModuleId,
    /// Question being answered. It is looked up globally and need not belong
    /// to `module_id`.
    pub question_id: QuestionId,
    pub answer: String,
    /// Seconds the learner took; fractional values are kept as submitted.
    pub time_taken_secs: f64,
}

/// Result of a graded submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub outcome: GradeOutcome,
    pub new_difficulty: Difficulty,
    /// The record after this answer was applied.
    pub progress: ProgressRecord,
}

pub struct SubmitAnswerHandler {
    catalog: Arc<dyn ContentCatalog>,
    progress_store: Arc<dyn ProgressStore>,
    locks: ProgressLocks,
}

impl SubmitAnswerHandler {
    pub fn new(
        catalog: Arc<dyn ContentCatalog>,
        progress_store: Arc<dyn ProgressStore>,
        locks: ProgressLocks,
    ) -> Self {
        Self {
            catalog,
            progress_store,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitAnswerResult, ActivityError> {
        // 1. Reject times grading cannot interpret
        if !cmd.time_taken_secs.is_finite() || cmd.time_taken_secs < 0.0 {
            return Err(ActivityError::validation(
                "timeTaken",
                "must be a non-negative number of seconds",
            ));
        }

        // 2. Find the question
        let question = self
            .catalog
            .find_question(&cmd.question_id)
            .await?
            .ok_or_else(|| ActivityError::question_not_found(cmd.question_id.clone()))?;

        // 3. Grade
        let outcome = grade(&question, &cmd.answer, cmd.time_taken_secs);

        // 4. Read-modify-write progress under the key lock
        let user_id = &metadata.user_id;
        let _guard = self.locks.acquire(user_id, &cmd.module_id).await;

        let prior = self.progress_store.get(user_id, &cmd.module_id).await?;
        let update = ProgressRecord::answer_update(prior.as_ref(), &outcome, cmd.time_taken_secs);
        let progress = self
            .progress_store
            .upsert(user_id, &cmd.module_id, update)
            .await?;

        tracing::info!(
            user_id = %user_id,
            module_id = %cmd.module_id,
            question_id = %cmd.question_id,
            is_correct = outcome.is_correct,
            points_earned = outcome.points_earned,
            streak = progress.consecutive_correct(),
            difficulty = %progress.current_difficulty(),
            correlation_id = %metadata.correlation_id(),
            "Answer graded"
        );

        Ok(SubmitAnswerResult {
            new_difficulty: progress.current_difficulty(),
            outcome,
            progress,
        })
    }
}
