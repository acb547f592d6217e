//! ListCategoriesHandler - Query handler for the category overview.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::ports::{CategorySummary, ContentCatalog};

/// Handler for listing every category with its module count.
pub struct ListCategoriesHandler {
    catalog: Arc<dyn ContentCatalog>,
}

impl ListCategoriesHandler {
    pub fn new(catalog: Arc<dyn ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<CategorySummary>, CatalogError> {
        Ok(self.catalog.list_categories().await?)
    }
}
