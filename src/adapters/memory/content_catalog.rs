//! In-memory content catalog.
//!
//! Built once from a validated [`CatalogContent`] and never mutated, so reads
//! need no locking.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::catalog::{CatalogContent, Category, LearningModule, Question};
use crate::domain::foundation::{CategoryId, DomainError, ModuleId, QuestionId, ValidationError};
use crate::ports::{CategorySummary, CategoryWithModules, ContentCatalog, ModuleWithQuestions};

#[derive(Debug, Clone)]
pub struct InMemoryContentCatalog {
    categories: Vec<Category>,
    modules: Vec<LearningModule>,
    questions: HashMap<QuestionId, Question>,
    /// Module ids per category, by ordering index.
    modules_by_category: HashMap<CategoryId, Vec<ModuleId>>,
    /// Question ids per module, by ordering index.
    questions_by_module: HashMap<ModuleId, Vec<QuestionId>>,
}

impl InMemoryContentCatalog {
    /// Indexes `content` after checking its references.
    pub fn new(content: CatalogContent) -> Result<Self, ValidationError> {
        content.validate()?;
        let content = content.with_defaults();

        let mut modules_by_category: HashMap<CategoryId, Vec<&LearningModule>> = HashMap::new();
        for module in &content.modules {
            modules_by_category
                .entry(module.category_id.clone())
                .or_default()
                .push(module);
        }
        let modules_by_category: HashMap<CategoryId, Vec<ModuleId>> = modules_by_category
            .into_iter()
            .map(|(category_id, mut modules)| {
                // Stable sort keeps seed order for equal indices.
                modules.sort_by_key(|m| m.position());
                (category_id, modules.into_iter().map(|m| m.id.clone()).collect())
            })
            .collect();

        let mut questions_by_module: HashMap<ModuleId, Vec<&Question>> = HashMap::new();
        for question in &content.questions {
            questions_by_module
                .entry(question.module_id.clone())
                .or_default()
                .push(question);
        }
        let questions_by_module: HashMap<ModuleId, Vec<QuestionId>> = questions_by_module
            .into_iter()
            .map(|(module_id, mut questions)| {
                questions.sort_by_key(|q| q.position());
                (module_id, questions.into_iter().map(|q| q.id.clone()).collect())
            })
            .collect();

        let questions = content
            .questions
            .into_iter()
            .map(|q| (q.id.clone(), q))
            .collect();

        Ok(Self {
            categories: content.categories,
            modules: content.modules,
            questions,
            modules_by_category,
            questions_by_module,
        })
    }

    fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    fn module(&self, id: &ModuleId) -> Option<&LearningModule> {
        self.modules.iter().find(|m| &m.id == id)
    }

    fn ordered_modules(&self, category_id: &CategoryId) -> Vec<LearningModule> {
        self.modules_by_category
            .get(category_id)
            .map(|ids| ids.iter().filter_map(|id| self.module(id)).cloned().collect())
            .unwrap_or_default()
    }

    fn ordered_questions(&self, module_id: &ModuleId) -> Vec<Question> {
        self.questions_by_module
            .get(module_id)
            .map(|ids| ids.iter().filter_map(|id| self.questions.get(id)).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentCatalog for InMemoryContentCatalog {
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, DomainError> {
        Ok(self
            .categories
            .iter()
            .map(|category| CategorySummary {
                category: category.clone(),
                module_count: self
                    .modules_by_category
                    .get(&category.id)
                    .map_or(0, |ids| ids.len() as u32),
            })
            .collect())
    }

    async fn category_with_modules(
        &self,
        id: &CategoryId,
    ) -> Result<Option<CategoryWithModules>, DomainError> {
        Ok(self.category(id).map(|category| CategoryWithModules {
            category: category.clone(),
            modules: self.ordered_modules(id),
        }))
    }

    async fn list_modules(&self) -> Result<Vec<LearningModule>, DomainError> {
        Ok(self.modules.clone())
    }

    async fn module_with_questions(
        &self,
        id: &ModuleId,
    ) -> Result<Option<ModuleWithQuestions>, DomainError> {
        Ok(self.module(id).map(|module| ModuleWithQuestions {
            questions: self.ordered_questions(id),
            category: self.category(&module.category_id).cloned(),
            module: module.clone(),
        }))
    }

    async fn find_module(&self, id: &ModuleId) -> Result<Option<LearningModule>, DomainError> {
        Ok(self.module(id).cloned())
    }

    async fn find_question(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self.questions.get(id).cloned())
    }

    async fn next_module(&self, id: &ModuleId) -> Result<Option<LearningModule>, DomainError> {
        let Some(current) = self.module(id) else {
            return Ok(None);
        };
        let Some(siblings) = self.modules_by_category.get(&current.category_id) else {
            return Ok(None);
        };
        Ok(siblings
            .iter()
            .position(|m| m == id)
            .and_then(|index| siblings.get(index + 1))
            .and_then(|next| self.module(next))
            .cloned())
    }
}
