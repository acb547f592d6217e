//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_category, get_module, list_categories, list_modules};
use crate::adapters::http::state::AppState;

/// Creates the catalog router.
///
/// Routes:
/// - `GET /api/categories` - Categories with module counts
/// - `GET /api/categories/:id` - Category with modules
/// - `GET /api/modules` - All modules
/// - `GET /api/modules/:id` - Module with questions and category
pub fn catalog_router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:id", get(get_category))
        .route("/api/modules", get(list_modules))
        .route("/api/modules/:id", get(get_module))
}
