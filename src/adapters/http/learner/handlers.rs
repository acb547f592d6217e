//! HTTP handlers for learner stats and progress.

use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentLearner;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{LearnerStats, ProgressOverview};

/// GET /api/user/stats - Lifetime points of the current learner
pub async fn get_stats(
    State(state): State<AppState>,
    CurrentLearner(user_id): CurrentLearner,
) -> Result<Json<LearnerStats>, ApiError> {
    let stats = state.get_stats_handler().handle(&user_id).await?;
    Ok(Json(stats))
}

/// GET /api/user/progress - Per-module progress keyed by module id
pub async fn get_progress(
    State(state): State<AppState>,
    CurrentLearner(user_id): CurrentLearner,
) -> Result<Json<ProgressOverview>, ApiError> {
    let overview = state.get_progress_handler().handle(&user_id).await?;
    Ok(Json(overview))
}
