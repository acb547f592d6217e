//! Route configuration for learning activity endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{complete_module, submit_answer};
use crate::adapters::http::state::AppState;

/// Creates the activity router.
///
/// Routes:
/// - `POST /api/modules/:id/answer` - Submit an answer
/// - `POST /api/modules/:id/complete` - Complete a module
///
/// Both need the learner context layer.
pub fn activity_router() -> Router<AppState> {
    Router::new()
        .route("/api/modules/:id/answer", post(submit_answer))
        .route("/api/modules/:id/complete", post(complete_module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{
        learner_layer, post_json, post_raw, test_state, TestApp,
    };
    use axum::http::StatusCode;
    use serde_json::json;

    fn app() -> TestApp {
        let state = test_state();
        let router = learner_layer(activity_router().with_state(state.clone()));
        TestApp { router, state }
    }

    #[tokio::test]
    async fn correct_fast_answer_earns_bonus() {
        let app = app();
        let (status, body) = post_json(
            app.router.clone(),
            "/api/modules/mod-math-1/answer",
            json!({"questionId": "q-math-1-1", "answer": " 3 ", "timeTaken": 4}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isCorrect"], true);
        assert_eq!(body["pointsEarned"], 12);
        assert_eq!(body["newDifficulty"], "easy");
        assert!(body.get("explanation").is_none());
    }

    #[tokio::test]
    async fn incorrect_answer_returns_explanation() {
        let app = app();
        let (status, body) = post_json(
            app.router.clone(),
            "/api/modules/mod-math-1/answer",
            json!({"questionId": "q-math-1-1", "answer": "4", "timeTaken": 5}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isCorrect"], false);
        assert_eq!(body["pointsEarned"], 0);
        assert_eq!(body["explanation"], "Count each apple: 1, 2, 3!");
    }

    #[tokio::test]
    async fn unknown_question_is_404_and_leaves_no_record() {
        let app = app();
        let (status, body) = post_json(
            app.router.clone(),
            "/api/modules/mod-math-1/answer",
            json!({"questionId": "q-missing", "answer": "3", "timeTaken": 5}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "QUESTION_NOT_FOUND");
        assert!(app.progress_records().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = app();
        let (status, body) = post_raw(
            app.router.clone(),
            "/api/modules/mod-math-1/answer",
            r#"{"questionId": "q-math-1-1", "answer": 3"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn missing_fields_are_400() {
        let app = app();
        let (status, _) = post_json(
            app.router.clone(),
            "/api/modules/mod-math-1/answer",
            json!({"questionId": "q-math-1-1"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_time_is_400() {
        let app = app();
        let (status, _) = post_json(
            app.router.clone(),
            "/api/modules/mod-math-1/answer",
            json!({"questionId": "q-math-1-1", "answer": "3", "timeTaken": -1}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(app.progress_records().await.is_empty());
    }

    #[tokio::test]
    async fn complete_returns_summary_and_credits_points() {
        let app = app();
        for question in ["q-math-1-1", "q-math-1-2"] {
            let answer = if question == "q-math-1-1" { "3" } else { "6" };
            post_json(
                app.router.clone(),
                "/api/modules/mod-math-1/answer",
                json!({"questionId": question, "answer": answer, "timeTaken": 30}),
            )
            .await;
        }

        let (status, body) = post_json(
            app.router.clone(),
            "/api/modules/mod-math-1/complete",
            json!({"pointsEarned": 9999, "correctAnswers": 5}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["moduleId"], "mod-math-1");
        assert_eq!(body["moduleTitle"], "Counting Fun");
        assert_eq!(body["totalQuestions"], 5);
        assert_eq!(body["correctAnswers"], 2);
        assert_eq!(body["totalPoints"], 20);
        assert_eq!(body["timeSpent"], 60.0);
        assert_eq!(body["nextModuleId"], "mod-math-2");
        assert_eq!(app.total_points().await, 20);
    }

    #[tokio::test]
    async fn complete_accepts_missing_body() {
        let app = app();
        let (status, body) = post_raw(app.router.clone(), "/api/modules/mod-math-4/complete", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalPoints"], 0);
        assert!(body.get("nextModuleId").is_none());
    }

    #[tokio::test]
    async fn complete_unknown_module_is_404_without_record() {
        let app = app();
        let (status, body) = post_json(
            app.router.clone(),
            "/api/modules/mod-nope/complete",
            json!({}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "MODULE_NOT_FOUND");
        assert!(app.progress_records().await.is_empty());
    }
}
