//! HTTP handlers for learning activity endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::HeaderMap;

use super::dto::{AnswerResponse, CompletionReport, SubmitAnswerRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentLearner;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{CompleteModuleCommand, SubmitAnswerCommand};
use crate::domain::foundation::{CommandMetadata, ModuleId, QuestionId, UserId};
use crate::domain::progress::ModuleCompletionSummary;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Command metadata correlated with the request id set by the router.
fn command_metadata(user_id: UserId, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(user_id).with_source("api");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty())
    {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}

/// POST /api/modules/:id/answer - Grade one answer and update progress
pub async fn submit_answer(
    State(state): State<AppState>,
    CurrentLearner(user_id): CurrentLearner,
    headers: HeaderMap,
    Path(module_id): Path<String>,
    body: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let Json(request) = body?;

    let cmd = SubmitAnswerCommand {
        module_id: ModuleId::new(module_id)?,
        question_id: QuestionId::new(request.question_id)?,
        answer: request.answer,
        time_taken_secs: request.time_taken,
    };
    let metadata = command_metadata(user_id, &headers);

    let result = state.submit_answer_handler().handle(cmd, metadata).await?;
    Ok(Json(AnswerResponse::from(result)))
}

/// POST /api/modules/:id/complete - Finish a module and credit its points
///
/// The body is optional. When present it is only logged.
pub async fn complete_module(
    State(state): State<AppState>,
    CurrentLearner(user_id): CurrentLearner,
    headers: HeaderMap,
    Path(module_id): Path<String>,
    report: Option<Json<CompletionReport>>,
) -> Result<Json<ModuleCompletionSummary>, ApiError> {
    let module_id = ModuleId::new(module_id)?;

    if let Some(Json(report)) = report {
        tracing::debug!(
            module_id = %module_id,
            reported_points = ?report.points_earned,
            reported_correct = ?report.correct_answers,
            reported_questions = ?report.total_questions,
            reported_time = ?report.time_spent,
            reported_difficulty = ?report.difficulty,
            "Ignoring client completion report"
        );
    }

    let metadata = command_metadata(user_id, &headers);
    let result = state
        .complete_module_handler()
        .handle(CompleteModuleCommand { module_id }, metadata)
        .await?;

    Ok(Json(result.summary))
}
