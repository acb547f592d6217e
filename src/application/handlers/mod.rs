//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod activity;
pub mod catalog;
pub mod learner;

pub use activity::{
    CompleteModuleCommand, CompleteModuleHandler, CompleteModuleResult, ProgressLocks,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
pub use catalog::{
    GetCategoryHandler, GetCategoryQuery, GetModuleHandler, GetModuleQuery,
    ListCategoriesHandler, ListModulesHandler,
};
pub use learner::{
    GetProgressHandler, GetStatsHandler, LearnerStats, ModuleProgress, ProgressOverview,
};
