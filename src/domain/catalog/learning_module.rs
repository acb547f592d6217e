//! Learning module content type.

use serde::{Deserialize, Serialize};

use super::CatalogDefaults;
use crate::domain::foundation::{CategoryId, Difficulty, ModuleId};

/// Target age band for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "3-5")]
    Preschool,
    #[serde(rename = "6-8")]
    EarlyReader,
    #[serde(rename = "9-12")]
    Preteen,
}

/// A sequence of questions within a category.
///
/// Optional fields resolve through [`CatalogDefaults`]; use the accessor
/// methods rather than reading the raw options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
    pub id: ModuleId,
    pub category_id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub age_group: AgeGroup,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub points_reward: Option<u32>,
    #[serde(default)]
    pub order: Option<u32>,
}

impl LearningModule {
    /// Number of questions the module is authored to contain.
    ///
    /// An unset or zero total falls back to the default so progress
    /// percentages never divide by zero.
    pub fn question_count(&self) -> u32 {
        self.total_questions
            .filter(|n| *n > 0)
            .unwrap_or(CatalogDefaults::TOTAL_QUESTIONS)
    }

    pub fn authored_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or(CatalogDefaults::DIFFICULTY)
    }

    pub fn minutes(&self) -> u32 {
        self.estimated_minutes
            .unwrap_or(CatalogDefaults::ESTIMATED_MINUTES)
    }

    pub fn reward(&self) -> u32 {
        self.points_reward.unwrap_or(CatalogDefaults::POINTS_REWARD)
    }

    /// Position within the owning category.
    pub fn position(&self) -> u32 {
        self.order.unwrap_or(CatalogDefaults::ORDER)
    }

    /// Copy with every defaulted field written out, as served to clients.
    pub fn with_defaults(self) -> Self {
        Self {
            difficulty: Some(self.authored_difficulty()),
            estimated_minutes: Some(self.minutes()),
            total_questions: Some(self.question_count()),
            points_reward: Some(self.reward()),
            order: Some(self.position()),
            ..self
        }
    }
}
