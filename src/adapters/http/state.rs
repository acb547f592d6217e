//! Shared application state.

use std::sync::Arc;

use crate::application::handlers::{
    CompleteModuleHandler, GetCategoryHandler, GetModuleHandler, GetProgressHandler,
    GetStatsHandler, ListCategoriesHandler, ListModulesHandler, ProgressLocks,
    SubmitAnswerHandler,
};
use crate::config::FeatureFlags;
use crate::ports::{ContentCatalog, LearnerRepository, ProgressStore};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ContentCatalog>,
    pub progress_store: Arc<dyn ProgressStore>,
    pub learners: Arc<dyn LearnerRepository>,
    /// Shared by every handler that rewrites progress records.
    pub progress_locks: ProgressLocks,
    pub features: FeatureFlags,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn ContentCatalog>,
        progress_store: Arc<dyn ProgressStore>,
        learners: Arc<dyn LearnerRepository>,
        features: FeatureFlags,
    ) -> Self {
        Self {
            catalog,
            progress_store,
            learners,
            progress_locks: ProgressLocks::new(),
            features,
        }
    }

    pub fn list_categories_handler(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(self.catalog.clone())
    }

    pub fn get_category_handler(&self) -> GetCategoryHandler {
        GetCategoryHandler::new(self.catalog.clone())
    }

    pub fn list_modules_handler(&self) -> ListModulesHandler {
        ListModulesHandler::new(self.catalog.clone())
    }

    pub fn get_module_handler(&self) -> GetModuleHandler {
        GetModuleHandler::new(self.catalog.clone())
    }

    pub fn submit_answer_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(
            self.catalog.clone(),
            self.progress_store.clone(),
            self.progress_locks.clone(),
        )
    }

    pub fn complete_module_handler(&self) -> CompleteModuleHandler {
        CompleteModuleHandler::new(
            self.catalog.clone(),
            self.progress_store.clone(),
            self.learners.clone(),
            self.progress_locks.clone(),
        )
        .with_idempotent_completion(self.features.idempotent_completion)
    }

    pub fn get_stats_handler(&self) -> GetStatsHandler {
        GetStatsHandler::new(self.learners.clone())
    }

    pub fn get_progress_handler(&self) -> GetProgressHandler {
        GetProgressHandler::new(self.progress_store.clone(), self.catalog.clone())
    }
}
