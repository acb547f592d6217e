//! Learner-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors from learner queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnerError {
    /// Learner or progress store could not be read.
    Infrastructure(String),
}

impl LearnerError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        LearnerError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LearnerError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            LearnerError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for LearnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LearnerError {}

impl From<DomainError> for LearnerError {
    fn from(err: DomainError) -> Self {
        LearnerError::Infrastructure(err.to_string())
    }
}
