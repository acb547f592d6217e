//! GetProgressHandler - Query handler for the per-module progress overview.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::catalog::CatalogDefaults;
use crate::domain::foundation::{ModuleId, Percentage, UserId};
use crate::domain::learner::LearnerError;
use crate::ports::{ContentCatalog, ProgressStore};

/// Progress through one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    /// Answers submitted relative to the module's question count, 0-100.
    pub progress: Percentage,
    pub is_completed: bool,
}

/// Module id to progress, for every module the learner has touched.
pub type ProgressOverview = BTreeMap<ModuleId, ModuleProgress>;

pub struct GetProgressHandler {
    progress_store: Arc<dyn ProgressStore>,
    catalog: Arc<dyn ContentCatalog>,
}

impl GetProgressHandler {
    pub fn new(progress_store: Arc<dyn ProgressStore>, catalog: Arc<dyn ContentCatalog>) -> Self {
        Self {
            progress_store,
            catalog,
        }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<ProgressOverview, LearnerError> {
        let records = self.progress_store.list_for_user(user_id).await?;

        let mut overview = ProgressOverview::new();
        for record in records {
            // Records may outlive a catalog swap; fall back to the default size.
            let total_questions = self
                .catalog
                .find_module(record.module_id())
                .await?
                .map_or(CatalogDefaults::TOTAL_QUESTIONS, |m| m.question_count());

            overview.insert(
                record.module_id().clone(),
                ModuleProgress {
                    progress: record.percent_complete(total_questions),
                    is_completed: record.is_completed(),
                },
            );
        }
        Ok(overview)
    }
}
