//! Shared fixtures for HTTP adapter tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::{middleware, Router};
use serde_json::Value;
use tower::ServiceExt;

use super::middleware::{learner_context, LearnerContext};
use super::state::AppState;
use crate::adapters::memory::{
    embedded_catalog, InMemoryContentCatalog, InMemoryLearnerRepository, InMemoryProgressStore,
};
use crate::config::FeatureFlags;
use crate::domain::catalog::AgeGroup;
use crate::domain::foundation::UserId;
use crate::domain::learner::Learner;
use crate::domain::progress::ProgressRecord;

pub const TEST_USER: &str = "default-user";

pub fn test_user() -> UserId {
    UserId::new(TEST_USER).unwrap()
}

pub fn test_learner() -> LearnerContext {
    LearnerContext {
        user_id: test_user(),
    }
}

/// Seeded catalog, empty progress, one learner with no points.
pub fn test_state() -> AppState {
    test_state_with(FeatureFlags::default())
}

pub fn test_state_with(features: FeatureFlags) -> AppState {
    let catalog = InMemoryContentCatalog::new(embedded_catalog().unwrap()).unwrap();
    let learner = Learner::new(test_user(), "learner", "Young Learner", Some(AgeGroup::EarlyReader))
        .unwrap();
    AppState::new(
        Arc::new(catalog),
        Arc::new(InMemoryProgressStore::new()),
        Arc::new(InMemoryLearnerRepository::with_learner(learner)),
        features,
    )
}

pub fn learner_layer(router: Router) -> Router {
    router.layer(middleware::from_fn_with_state(test_learner(), learner_context))
}

/// Router plus the state behind it, for asserting on stored data.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn progress_records(&self) -> Vec<ProgressRecord> {
        self.state
            .progress_store
            .list_for_user(&test_user())
            .await
            .unwrap()
    }

    pub async fn total_points(&self) -> u64 {
        self.state
            .learners
            .find_by_id(&test_user())
            .await
            .unwrap()
            .map_or(0, |learner| learner.total_points())
    }
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, &body.to_string()).await
}

pub async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
