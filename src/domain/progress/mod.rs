//! Progress module - Answer scoring and per-module learner progress.
//!
//! Grading and difficulty adaptation are pure functions; [`ProgressRecord`]
//! carries the mutable counters they feed.

mod adaptation;
mod errors;
mod grading;
mod record;
mod summary;

pub use adaptation::{next_difficulty, HARD_PROMOTION_STREAK, MEDIUM_PROMOTION_STREAK};
pub use errors::ActivityError;
pub use grading::{
    grade, normalize_answer, time_adjusted_points, GradeOutcome, SLOW_PENALTY_ABOVE_SECS,
    SLOW_PENALTY_MULTIPLIER, SPEED_BONUS_BELOW_SECS, SPEED_BONUS_MULTIPLIER,
};
pub use record::{ProgressRecord, ProgressUpdate};
pub use summary::ModuleCompletionSummary;
