//! Learner query handlers.

mod get_progress;
mod get_stats;

pub use get_progress::{GetProgressHandler, ModuleProgress, ProgressOverview};
pub use get_stats::{GetStatsHandler, LearnerStats};
