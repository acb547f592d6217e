//! Answer grading.
//!
//! A pure function of the question, the submitted text and the time taken.
//! Correctness is exact equality after trimming and lower-casing both sides;
//! there is no fuzzy matching and no partial credit.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Question;

/// Answers faster than this (strictly) earn the speed bonus.
pub const SPEED_BONUS_BELOW_SECS: f64 = 10.0;

/// Answers slower than this (strictly) take the slow penalty.
pub const SLOW_PENALTY_ABOVE_SECS: f64 = 60.0;

pub const SPEED_BONUS_MULTIPLIER: f64 = 1.2;

pub const SLOW_PENALTY_MULTIPLIER: f64 = 0.8;

/// Result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeOutcome {
    pub is_correct: bool,
    pub points_earned: u32,
    /// Present only for incorrect answers whose question carries an explanation.
    pub explanation: Option<String>,
}

/// Canonical form used on both sides of the comparison.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Grades `submitted` against `question`.
pub fn grade(question: &Question, submitted: &str, time_taken_secs: f64) -> GradeOutcome {
    let is_correct = normalize_answer(submitted) == normalize_answer(&question.correct_answer);

    if !is_correct {
        return GradeOutcome {
            is_correct: false,
            points_earned: 0,
            explanation: question.explanation.clone(),
        };
    }

    GradeOutcome {
        is_correct: true,
        points_earned: time_adjusted_points(question.base_points(), time_taken_secs),
        explanation: None,
    }
}

/// Applies the speed bonus or slow penalty to `base`, rounding half away from zero.
///
/// Exactly 10 and exactly 60 seconds are left unchanged.
pub fn time_adjusted_points(base: u32, time_taken_secs: f64) -> u32 {
    let multiplier = if time_taken_secs < SPEED_BONUS_BELOW_SECS {
        SPEED_BONUS_MULTIPLIER
    } else if time_taken_secs > SLOW_PENALTY_ABOVE_SECS {
        SLOW_PENALTY_MULTIPLIER
    } else {
        return base;
    };
    (f64::from(base) * multiplier).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionKind;
    use proptest::prelude::*;

    fn question(correct: &str, points: Option<u32>, explanation: Option<&str>) -> Question {
        Question {
            id: "q-test".parse().unwrap(),
            module_id: "mod-test".parse().unwrap(),
            kind: QuestionKind::MultipleChoice,
            question_text: "What is the capital of France?".to_string(),
            options: Some(vec!["Paris".into(), "Rome".into()]),
            correct_answer: correct.to_string(),
            explanation: explanation.map(str::to_string),
            points,
            difficulty: None,
            order: Some(1),
        }
    }

    #[test]
    fn comparison_ignores_case_and_surrounding_whitespace() {
        let q = question("Paris", Some(10), None);
        assert!(grade(&q, " Paris ", 20.0).is_correct);
        assert!(grade(&q, "paris", 20.0).is_correct);
        assert!(grade(&q, "PARIS\n", 20.0).is_correct);
        assert!(!grade(&q, "Pa ris", 20.0).is_correct);
    }

    #[test]
    fn incorrect_answer_earns_nothing_and_explains() {
        let q = question("3", Some(10), Some("Count each apple: 1, 2, 3!"));
        let outcome = grade(&q, "4", 5.0);
        assert!(!outcome.is_correct);
        assert_eq!(outcome.points_earned, 0);
        assert_eq!(outcome.explanation.as_deref(), Some("Count each apple: 1, 2, 3!"));
    }

    #[test]
    fn correct_answer_omits_explanation() {
        let q = question("3", Some(10), Some("Count each apple"));
        assert_eq!(grade(&q, "3", 30.0).explanation, None);
    }

    #[test]
    fn speed_bonus_applies_strictly_below_ten_seconds() {
        let q = question("6", Some(10), None);
        assert_eq!(grade(&q, "6", 9.0).points_earned, 12);
        assert_eq!(grade(&q, "6", 9.999).points_earned, 12);
        assert_eq!(grade(&q, "6", 10.0).points_earned, 10);
    }

    #[test]
    fn slow_penalty_applies_strictly_above_sixty_seconds() {
        let q = question("6", Some(10), None);
        assert_eq!(grade(&q, "6", 60.0).points_earned, 10);
        assert_eq!(grade(&q, "6", 61.0).points_earned, 8);
    }

    #[test]
    fn multipliers_round_to_nearest_integer() {
        // 15 * 1.2 = 18, 12 * 0.8 = 9.6, 11 * 1.2 = 13.2, 14 * 0.8 = 11.2
        assert_eq!(time_adjusted_points(15, 1.0), 18);
        assert_eq!(time_adjusted_points(12, 90.0), 10);
        assert_eq!(time_adjusted_points(11, 1.0), 13);
        assert_eq!(time_adjusted_points(14, 90.0), 11);
    }

    #[test]
    fn unset_points_use_default_base() {
        let q = question("True", None, None);
        assert_eq!(grade(&q, "true", 30.0).points_earned, 10);
        assert_eq!(grade(&q, "true", 2.0).points_earned, 12);
    }

    proptest! {
        #[test]
        fn padding_and_case_never_change_correctness(
            answer in "[A-Za-z0-9 ]{1,12}",
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
            time in 0.0f64..120.0,
        ) {
            let q = question(&answer, Some(10), None);
            let padded = format!("{}{}{}", left, answer.to_uppercase(), right);
            prop_assert_eq!(
                grade(&q, &padded, time).is_correct,
                grade(&q, &answer.to_lowercase(), time).is_correct
            );
        }

        #[test]
        fn points_stay_within_multiplier_band(base in 0u32..1000, time in 0.0f64..300.0) {
            let points = time_adjusted_points(base, time);
            let low = (f64::from(base) * SLOW_PENALTY_MULTIPLIER).round() as u32;
            let high = (f64::from(base) * SPEED_BONUS_MULTIPLIER).round() as u32;
            prop_assert!(points >= low && points <= high);
        }
    }
}
