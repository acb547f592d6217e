//! Difficulty adaptation.
//!
//! Rules, first match wins:
//!
//! 1. streak >= 3 while easy: medium
//! 2. streak >= 5 while medium: hard
//! 3. incorrect while above easy: one level down
//! 4. otherwise unchanged
//!
//! Promotion needs a streak, demotion happens on any miss. The streak passed in
//! is the value after the current answer has been counted.

use crate::domain::foundation::Difficulty;

/// Streak needed to leave easy.
pub const MEDIUM_PROMOTION_STREAK: u32 = 3;

/// Streak needed to leave medium.
pub const HARD_PROMOTION_STREAK: u32 = 5;

/// Streak that moves `level` up one step, or `None` at the top.
fn promotion_streak(level: Difficulty) -> Option<u32> {
    match level {
        Difficulty::Easy => Some(MEDIUM_PROMOTION_STREAK),
        Difficulty::Medium => Some(HARD_PROMOTION_STREAK),
        Difficulty::Hard => None,
    }
}

/// Next difficulty after an answer.
pub fn next_difficulty(
    current: Difficulty,
    streak_after_answer: u32,
    is_correct: bool,
) -> Difficulty {
    let promote = promotion_streak(current).is_some_and(|needed| streak_after_answer >= needed);
    let next = if promote {
        current.harder()
    } else if !is_correct {
        current.easier()
    } else {
        None
    };
    next.unwrap_or(current)
}
