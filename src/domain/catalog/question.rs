//! Question content type.

use serde::{Deserialize, Serialize};

use super::CatalogDefaults;
use crate::domain::foundation::{Difficulty, ModuleId, QuestionId};

/// How a question is presented to the learner.
///
/// Grading treats every kind the same way: normalized string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    FillBlank,
    Matching,
}

/// A single question belonging to one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub module_id: ModuleId,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question_text: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub order: Option<u32>,
}

impl Question {
    /// Points awarded for a correct answer before any time multiplier.
    pub fn base_points(&self) -> u32 {
        self.points.unwrap_or(CatalogDefaults::QUESTION_POINTS)
    }

    pub fn authored_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or(CatalogDefaults::DIFFICULTY)
    }

    /// Position within the owning module.
    pub fn position(&self) -> u32 {
        self.order.unwrap_or(CatalogDefaults::ORDER)
    }

    /// Copy with points, difficulty and order written out.
    pub fn with_defaults(self) -> Self {
        Self {
            points: Some(self.base_points()),
            difficulty: Some(self.authored_difficulty()),
            order: Some(self.position()),
            ..self
        }
    }
}
