//! GetModuleHandler - Query handler for a module with its questions.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ModuleId;
use crate::ports::{ContentCatalog, ModuleWithQuestions};

/// Query to get a module by ID.
#[derive(Debug, Clone)]
pub struct GetModuleQuery {
    pub module_id: ModuleId,
}

/// Returns the module, its questions by ordering index and its parent
/// category.
pub struct GetModuleHandler {
    catalog: Arc<dyn ContentCatalog>,
}

impl GetModuleHandler {
    pub fn new(catalog: Arc<dyn ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetModuleQuery) -> Result<ModuleWithQuestions, CatalogError> {
        self.catalog
            .module_with_questions(&query.module_id)
            .await?
            .ok_or(CatalogError::ModuleNotFound(query.module_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{embedded_catalog, InMemoryContentCatalog};

    fn handler() -> GetModuleHandler {
        let catalog = InMemoryContentCatalog::new(embedded_catalog().unwrap()).unwrap();
        GetModuleHandler::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn returns_questions_and_category() {
        let view = handler()
            .handle(GetModuleQuery {
                module_id: "mod-science-4".parse().unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(view.module.title, "The Solar System");
        assert_eq!(view.questions.len(), 5);
        assert_eq!(view.category.map(|c| c.name), Some("Science".to_string()));
    }

    #[tokio::test]
    async fn unknown_module_is_not_found() {
        let err = handler()
            .handle(GetModuleQuery {
                module_id: "mod-nope".parse().unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ModuleNotFound(_)));
    }
}
