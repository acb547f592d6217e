//! Learner context middleware and extractor.
//!
//! There is no authentication: `learner_context` stamps every request with the
//! configured default learner, and handlers read it back with
//! [`CurrentLearner`].
//!
//! ```text
//! Request → learner_context → injects LearnerContext into extensions
//!                                      ↓
//!                              Handler → CurrentLearner extractor reads from extensions
//! ```

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::UserId;

/// The learner a request acts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerContext {
    pub user_id: UserId,
}

/// Inserts the configured learner into request extensions.
pub async fn learner_context(
    State(context): State<LearnerContext>,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Extractor for the learner injected by [`learner_context`].
///
/// Fails with 500 when the middleware is missing from the stack.
#[derive(Debug, Clone)]
pub struct CurrentLearner(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentLearner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<LearnerContext>()
            .map(|context| CurrentLearner(context.user_id.clone()))
            .ok_or_else(|| ApiError::Internal("learner context middleware not installed".to_string()))
    }
}
