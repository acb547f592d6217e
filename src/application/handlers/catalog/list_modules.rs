//! ListModulesHandler - Query handler for every module.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, LearningModule};
use crate::ports::ContentCatalog;

pub struct ListModulesHandler {
    catalog: Arc<dyn ContentCatalog>,
}

impl ListModulesHandler {
    pub fn new(catalog: Arc<dyn ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<LearningModule>, CatalogError> {
        Ok(self.catalog.list_modules().await?)
    }
}
