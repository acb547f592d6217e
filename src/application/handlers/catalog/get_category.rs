//! GetCategoryHandler - Query handler for one category and its modules.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::CategoryId;
use crate::ports::{CategoryWithModules, ContentCatalog};

/// Query to get a category by ID.
#[derive(Debug, Clone)]
pub struct GetCategoryQuery {
    pub category_id: CategoryId,
}

pub struct GetCategoryHandler {
    catalog: Arc<dyn ContentCatalog>,
}

impl GetCategoryHandler {
    pub fn new(catalog: Arc<dyn ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetCategoryQuery) -> Result<CategoryWithModules, CatalogError> {
        self.catalog
            .category_with_modules(&query.category_id)
            .await?
            .ok_or(CatalogError::CategoryNotFound(query.category_id))
    }
}
