//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the learning domain.

mod command;
mod difficulty;
mod errors;
mod ids;
mod percentage;

pub use command::CommandMetadata;
pub use difficulty::Difficulty;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CategoryId, ModuleId, ProgressRecordId, QuestionId, UserId};
pub use percentage::Percentage;
