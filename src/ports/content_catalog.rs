//! Content catalog port (read only).
//!
//! Categories, modules and questions are loaded once and never change for the
//! life of the process. Ordering follows each item's ordering index, with
//! unset indices treated as 0 and ties kept in seed order.

use crate::domain::catalog::{Category, LearningModule, Question};
use crate::domain::foundation::{CategoryId, DomainError, ModuleId, QuestionId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for learning content.
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// All categories in seed order, each with its module count.
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, DomainError>;

    /// A category and its modules ordered by ordering index.
    ///
    /// Returns `None` if not found.
    async fn category_with_modules(
        &self,
        id: &CategoryId,
    ) -> Result<Option<CategoryWithModules>, DomainError>;

    /// All modules in seed order.
    async fn list_modules(&self) -> Result<Vec<LearningModule>, DomainError>;

    /// A module, its ordered questions and its parent category.
    ///
    /// Returns `None` if not found.
    async fn module_with_questions(
        &self,
        id: &ModuleId,
    ) -> Result<Option<ModuleWithQuestions>, DomainError>;

    /// Module metadata only.
    async fn find_module(&self, id: &ModuleId) -> Result<Option<LearningModule>, DomainError>;

    /// A single question by id, regardless of module.
    async fn find_question(&self, id: &QuestionId) -> Result<Option<Question>, DomainError>;

    /// The module after `id` within the same category.
    ///
    /// Returns `None` for the last module or an unknown id.
    async fn next_module(&self, id: &ModuleId) -> Result<Option<LearningModule>, DomainError>;
}

/// Category list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,

    /// Number of modules in the category.
    pub module_count: u32,
}

/// Category detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithModules {
    #[serde(flatten)]
    pub category: Category,

    pub modules: Vec<LearningModule>,
}

/// Module detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleWithQuestions {
    #[serde(flatten)]
    pub module: LearningModule,

    pub questions: Vec<Question>,

    /// Parent category, absent if the reference dangles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}
