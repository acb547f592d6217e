//! HTTP handlers for catalog endpoints.
//!
//! Read models from the catalog port are already camelCase and are returned
//! as-is.

use axum::extract::{Json, Path, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetCategoryQuery, GetModuleQuery};
use crate::domain::catalog::LearningModule;
use crate::domain::foundation::{CategoryId, ModuleId};
use crate::ports::{CategorySummary, CategoryWithModules, ModuleWithQuestions};

/// GET /api/categories - All categories with module counts
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySummary>>, ApiError> {
    let categories = state.list_categories_handler().handle().await?;
    Ok(Json(categories))
}

/// GET /api/categories/:id - One category with its ordered modules
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryWithModules>, ApiError> {
    let category_id = CategoryId::new(category_id)?;
    let view = state
        .get_category_handler()
        .handle(GetCategoryQuery { category_id })
        .await?;
    Ok(Json(view))
}

/// GET /api/modules - All modules
pub async fn list_modules(
    State(state): State<AppState>,
) -> Result<Json<Vec<LearningModule>>, ApiError> {
    let modules = state.list_modules_handler().handle().await?;
    Ok(Json(modules))
}

/// GET /api/modules/:id - One module with its questions and category
pub async fn get_module(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<Json<ModuleWithQuestions>, ApiError> {
    let module_id = ModuleId::new(module_id)?;
    let view = state
        .get_module_handler()
        .handle(GetModuleQuery { module_id })
        .await?;
    Ok(Json(view))
}
