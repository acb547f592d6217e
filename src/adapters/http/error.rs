//! HTTP error mapping.
//!
//! Feature errors convert into [`ApiError`], which renders as an
//! [`ErrorResponse`] body with the matching status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::learner::LearnerError;
use crate::domain::progress::ActivityError;

/// Message shown for every internal failure; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Cause of an internal error, attached to the response for
/// [`expose_error_details`](super::middleware::expose_error_details).
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound { code: ErrorCode, message: String },
    Internal(String),
}

impl ApiError {
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            code,
            message: message.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::CategoryNotFound(_) | CatalogError::ModuleNotFound(_) => {
                ApiError::not_found(err.code(), err.message())
            }
            CatalogError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::QuestionNotFound(_) | ActivityError::ModuleNotFound(_) => {
                ApiError::not_found(err.code(), err.message())
            }
            ActivityError::ValidationFailed { .. } => ApiError::BadRequest(err.message()),
            ActivityError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<LearnerError> for ApiError {
    fn from(err: LearnerError) -> Self {
        match err {
            LearnerError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(msg))).into_response()
            }
            ApiError::NotFound { code, message } => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(code, message))).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal(INTERNAL_ERROR_MESSAGE)),
                )
                    .into_response();
                response.extensions_mut().insert(InternalErrorDetail(detail));
                response
            }
        }
    }
}
