//! Verbose error middleware.
//!
//! Internal errors normally render a generic message. When
//! `features.verbose_errors` is on, this layer copies the logged cause into
//! the response `details`.

use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{ErrorResponse, InternalErrorDetail, INTERNAL_ERROR_MESSAGE};

/// Adds the internal cause to 500 bodies produced by `ApiError`.
pub async fn expose_error_details(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let Some(InternalErrorDetail(detail)) = response.extensions().get::<InternalErrorDetail>().cloned()
    else {
        return response;
    };

    let (mut parts, _body) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    let body = ErrorResponse {
        details: Some(serde_json::json!({ "cause": detail })),
        ..ErrorResponse::internal(INTERNAL_ERROR_MESSAGE)
    };
    (parts, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::error::ApiError;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    async fn failing() -> Result<&'static str, ApiError> {
        Err(ApiError::Internal("store offline".to_string()))
    }

    async fn body(app: Router) -> (StatusCode, ErrorResponse) {
        let response = app
            .oneshot(HttpRequest::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn details_added_when_layer_installed() {
        let app = Router::new()
            .route("/", get(failing))
            .layer(middleware::from_fn(expose_error_details));
        let (status, body) = body(app).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.details.unwrap()["cause"], "store offline");
    }

    #[tokio::test]
    async fn details_absent_without_layer() {
        let app = Router::new().route("/", get(failing));
        let (_, body) = body(app).await;
        assert!(body.details.is_none());
    }
}
