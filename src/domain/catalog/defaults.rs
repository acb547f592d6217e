//! Fallback values for catalog fields an author may leave unset.
//!
//! Every "if unset" rule resolves here, so grading, completion and progress
//! reporting cannot drift apart.

use crate::domain::foundation::Difficulty;

/// Defaults table for optional catalog fields.
pub struct CatalogDefaults;

impl CatalogDefaults {
    /// Base points for a question without an authored value.
    pub const QUESTION_POINTS: u32 = 10;

    /// Question count assumed for a module without an authored total.
    pub const TOTAL_QUESTIONS: u32 = 5;

    /// Difficulty for content without an authored tag, and for new progress records.
    pub const DIFFICULTY: Difficulty = Difficulty::Easy;

    pub const ESTIMATED_MINUTES: u32 = 10;

    pub const POINTS_REWARD: u32 = 100;

    /// Ordering index for content without an authored position.
    pub const ORDER: u32 = 0;
}
