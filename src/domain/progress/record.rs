//! Progress record entity.
//!
//! One record per (learner, module). Records are created lazily on the first
//! upsert and never deleted; completing a module only flips `is_completed`,
//! so a replay continues from the residual counters.

use serde::{Deserialize, Serialize};

use super::adaptation::next_difficulty;
use super::grading::GradeOutcome;
use crate::domain::catalog::CatalogDefaults;
use crate::domain::foundation::{Difficulty, ModuleId, Percentage, ProgressRecordId, UserId};

/// Mutable learner progress through one module.
///
/// # Invariants
///
/// - `consecutive_correct` is 0 right after an incorrect answer
/// - `current_difficulty` only changes through difficulty adaptation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    id: ProgressRecordId,
    user_id: UserId,
    module_id: ModuleId,
    questions_completed: u32,
    correct_answers: u32,
    consecutive_correct: u32,
    points_earned: u32,
    is_completed: bool,
    current_difficulty: Difficulty,
    time_spent_seconds: f64,
}

/// Partial update for a progress record.
///
/// Present fields replace the stored value wholesale; callers compute the new
/// cumulative values themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressUpdate {
    pub questions_completed: Option<u32>,
    pub correct_answers: Option<u32>,
    pub consecutive_correct: Option<u32>,
    pub points_earned: Option<u32>,
    pub is_completed: Option<bool>,
    pub current_difficulty: Option<Difficulty>,
    pub time_spent_seconds: Option<f64>,
}

impl ProgressUpdate {
    /// Update that only marks the module completed.
    pub fn completed() -> Self {
        Self {
            is_completed: Some(true),
            ..Self::default()
        }
    }
}

impl ProgressRecord {
    /// Fresh record: zero counters, default difficulty, not completed.
    pub fn new(user_id: UserId, module_id: ModuleId) -> Self {
        Self {
            id: ProgressRecordId::new(),
            user_id,
            module_id,
            questions_completed: 0,
            correct_answers: 0,
            consecutive_correct: 0,
            points_earned: 0,
            is_completed: false,
            current_difficulty: CatalogDefaults::DIFFICULTY,
            time_spent_seconds: 0.0,
        }
    }

    /// Merges the present fields of `update` onto this record.
    pub fn apply(&mut self, update: &ProgressUpdate) {
        if let Some(v) = update.questions_completed {
            self.questions_completed = v;
        }
        if let Some(v) = update.correct_answers {
            self.correct_answers = v;
        }
        if let Some(v) = update.consecutive_correct {
            self.consecutive_correct = v;
        }
        if let Some(v) = update.points_earned {
            self.points_earned = v;
        }
        if let Some(v) = update.is_completed {
            self.is_completed = v;
        }
        if let Some(v) = update.current_difficulty {
            self.current_difficulty = v;
        }
        if let Some(v) = update.time_spent_seconds {
            self.time_spent_seconds = v;
        }
    }

    /// Builds the cumulative update for one graded answer.
    ///
    /// `prior` is the stored record, if any; an absent record counts as fresh.
    /// The returned update always carries the adapted difficulty.
    pub fn answer_update(
        prior: Option<&ProgressRecord>,
        outcome: &GradeOutcome,
        time_taken_secs: f64,
    ) -> ProgressUpdate {
        let (completed, correct, streak, points, difficulty, time) = match prior {
            Some(p) => (
                p.questions_completed,
                p.correct_answers,
                p.consecutive_correct,
                p.points_earned,
                p.current_difficulty,
                p.time_spent_seconds,
            ),
            None => (0, 0, 0, 0, CatalogDefaults::DIFFICULTY, 0.0),
        };

        let streak = if outcome.is_correct {
            streak.saturating_add(1)
        } else {
            0
        };

        ProgressUpdate {
            questions_completed: Some(completed.saturating_add(1)),
            correct_answers: Some(correct.saturating_add(u32::from(outcome.is_correct))),
            consecutive_correct: Some(streak),
            points_earned: Some(points.saturating_add(outcome.points_earned)),
            is_completed: None,
            current_difficulty: Some(next_difficulty(difficulty, streak, outcome.is_correct)),
            time_spent_seconds: Some(time + time_taken_secs),
        }
    }

    /// Share of the module's questions answered so far, capped at 100%.
    pub fn percent_complete(&self, total_questions: u32) -> Percentage {
        Percentage::from_ratio(self.questions_completed, total_questions)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProgressRecordId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    pub fn questions_completed(&self) -> u32 {
        self.questions_completed
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn consecutive_correct(&self) -> u32 {
        self.consecutive_correct
    }

    pub fn points_earned(&self) -> u32 {
        self.points_earned
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn current_difficulty(&self) -> Difficulty {
        self.current_difficulty
    }

    pub fn time_spent_seconds(&self) -> f64 {
        self.time_spent_seconds
    }
}
