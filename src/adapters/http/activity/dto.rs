//! Request and response DTOs for activity endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SubmitAnswerResult;
use crate::domain::foundation::Difficulty;

/// Body of `POST /api/modules/:id/answer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub question_id: String,
    pub answer: String,
    /// Seconds the learner spent on the question.
    pub time_taken: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub is_correct: bool,
    pub points_earned: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub new_difficulty: Difficulty,
}

impl From<SubmitAnswerResult> for AnswerResponse {
    fn from(result: SubmitAnswerResult) -> Self {
        Self {
            is_correct: result.outcome.is_correct,
            points_earned: result.outcome.points_earned,
            explanation: result.outcome.explanation,
            new_difficulty: result.new_difficulty,
        }
    }
}

/// Client-side tally sent with `POST /api/modules/:id/complete`.
///
/// Accepted for compatibility and logged; the stored record is authoritative.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub correct_answers: Option<u32>,
    pub total_questions: Option<u32>,
    pub points_earned: Option<u32>,
    pub time_spent: Option<f64>,
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_reads_camel_case() {
        let json = r#"{"questionId":"q-math-1-1","answer":"3","timeTaken":4.2}"#;
        let request: SubmitAnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.question_id, "q-math-1-1");
        assert_eq!(request.time_taken, 4.2);
    }

    #[test]
    fn submit_request_requires_time_taken() {
        let json = r#"{"questionId":"q-math-1-1","answer":"3"}"#;
        assert!(serde_json::from_str::<SubmitAnswerRequest>(json).is_err());
    }

    #[test]
    fn answer_response_omits_missing_explanation() {
        let response = AnswerResponse {
            is_correct: true,
            points_earned: 12,
            explanation: None,
            new_difficulty: Difficulty::Easy,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isCorrect"], true);
        assert_eq!(json["pointsEarned"], 12);
        assert_eq!(json["newDifficulty"], "easy");
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn completion_report_fields_are_optional() {
        let report: CompletionReport = serde_json::from_str("{}").unwrap();
        assert!(report.points_earned.is_none());

        let json = r#"{"correctAnswers":4,"totalQuestions":5,"pointsEarned":46,"timeSpent":80.5,"difficulty":"medium"}"#;
        let report: CompletionReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.points_earned, Some(46));
        assert_eq!(report.difficulty, Some(Difficulty::Medium));
    }
}
