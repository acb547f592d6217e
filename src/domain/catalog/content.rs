//! The complete static content set a catalog is built from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Category, LearningModule, Question};
use crate::domain::foundation::ValidationError;

/// Categories, modules and questions as authored.
///
/// # Invariants (checked by [`CatalogContent::validate`])
///
/// - ids are unique within their kind
/// - every module references an existing category
/// - every question references an existing module
/// - no question has a blank correct answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogContent {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub modules: Vec<LearningModule>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl CatalogContent {
    /// Checks referential integrity of the content set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(duplicate("category", category.id.as_str()));
            }
        }

        let mut module_ids = HashSet::new();
        for module in &self.modules {
            if !module_ids.insert(module.id.as_str()) {
                return Err(duplicate("module", module.id.as_str()));
            }
            if !category_ids.contains(module.category_id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "module.categoryId",
                    format!(
                        "module '{}' references unknown category '{}'",
                        module.id, module.category_id
                    ),
                ));
            }
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(duplicate("question", question.id.as_str()));
            }
            if !module_ids.contains(question.module_id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "question.moduleId",
                    format!(
                        "question '{}' references unknown module '{}'",
                        question.id, question.module_id
                    ),
                ));
            }
            if question.correct_answer.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "question '{}' correctAnswer",
                    question.id
                )));
            }
        }

        Ok(())
    }

    /// Resolves every unset module and question field through the defaults
    /// table, so readers never see a missing value the engine would fill in.
    pub fn with_defaults(self) -> Self {
        Self {
            categories: self.categories,
            modules: self.modules.into_iter().map(LearningModule::with_defaults).collect(),
            questions: self.questions.into_iter().map(Question::with_defaults).collect(),
        }
    }
}

fn duplicate(kind: &str, id: &str) -> ValidationError {
    ValidationError::invalid_format(format!("{}.id", kind), format!("duplicate id '{}'", id))
}
