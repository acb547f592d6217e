//! Learning activity error types.

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{DomainError, ErrorCode, ModuleId, QuestionId};

/// Errors from answer submission and module completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// Submitted question id is not in the catalog.
    QuestionNotFound(QuestionId),
    /// Module id is not in the catalog.
    ModuleNotFound(ModuleId),
    /// Submission failed validation.
    ValidationFailed { field: String, message: String },
    /// Store or catalog failure.
    Infrastructure(String),
}

impl ActivityError {
    pub fn question_not_found(id: QuestionId) -> Self {
        ActivityError::QuestionNotFound(id)
    }

    pub fn module_not_found(id: ModuleId) -> Self {
        ActivityError::ModuleNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ActivityError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ActivityError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ActivityError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            ActivityError::ModuleNotFound(_) => ErrorCode::ModuleNotFound,
            ActivityError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ActivityError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ActivityError::QuestionNotFound(id) => format!("Question not found: {}", id),
            ActivityError::ModuleNotFound(id) => format!("Module not found: {}", id),
            ActivityError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ActivityError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ActivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ActivityError {}

impl From<DomainError> for ActivityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ActivityError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ActivityError::Infrastructure(err.to_string()),
        }
    }
}

impl From<CatalogError> for ActivityError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ModuleNotFound(id) => ActivityError::ModuleNotFound(id),
            other => ActivityError::Infrastructure(other.message()),
        }
    }
}
