//! Module completion summary.

use serde::{Deserialize, Serialize};

use super::record::ProgressRecord;
use crate::domain::catalog::LearningModule;
use crate::domain::foundation::{Difficulty, ModuleId};

/// Snapshot returned when a learner finishes a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCompletionSummary {
    pub module_id: ModuleId,
    pub module_title: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub total_points: u32,
    pub time_spent: f64,
    pub difficulty_achieved: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_module_id: Option<ModuleId>,
}

impl ModuleCompletionSummary {
    /// Assembles the summary from module metadata and the finalized record.
    pub fn from_record(
        module: &LearningModule,
        record: &ProgressRecord,
        next_module_id: Option<ModuleId>,
    ) -> Self {
        Self {
            module_id: module.id.clone(),
            module_title: module.title.clone(),
            total_questions: module.question_count(),
            correct_answers: record.correct_answers(),
            total_points: record.points_earned(),
            time_spent: record.time_spent_seconds(),
            difficulty_achieved: record.current_difficulty(),
            next_module_id,
        }
    }
}
