//! Catalog-specific error types.

use crate::domain::foundation::{CategoryId, DomainError, ErrorCode, ModuleId};

/// Errors from catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Category id is not in the catalog.
    CategoryNotFound(CategoryId),
    /// Module id is not in the catalog.
    ModuleNotFound(ModuleId),
    /// Catalog could not be read.
    Infrastructure(String),
}

impl CatalogError {
    pub fn category_not_found(id: CategoryId) -> Self {
        CatalogError::CategoryNotFound(id)
    }

    pub fn module_not_found(id: ModuleId) -> Self {
        CatalogError::ModuleNotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
            CatalogError::ModuleNotFound(_) => ErrorCode::ModuleNotFound,
            CatalogError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CatalogError::CategoryNotFound(id) => format!("Category not found: {}", id),
            CatalogError::ModuleNotFound(id) => format!("Module not found: {}", id),
            CatalogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Infrastructure(err.to_string())
    }
}
