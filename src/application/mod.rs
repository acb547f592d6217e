//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    CompleteModuleCommand, CompleteModuleHandler, CompleteModuleResult, GetCategoryHandler,
    GetCategoryQuery, GetModuleHandler, GetModuleQuery, GetProgressHandler, GetStatsHandler,
    LearnerStats, ListCategoriesHandler, ListModulesHandler, ModuleProgress, ProgressLocks,
    ProgressOverview, SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
