//! Route configuration for learner endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_progress, get_stats};
use crate::adapters::http::state::AppState;

/// Creates the learner router.
///
/// Routes:
/// - `GET /api/user/stats` - Total points
/// - `GET /api/user/progress` - Progress per started module
pub fn learner_router() -> Router<AppState> {
    Router::new()
        .route("/api/user/stats", get(get_stats))
        .route("/api/user/progress", get(get_progress))
}
