//! Router assembly.
//!
//! `api_router` wires every feature router to the shared state and learner
//! context. `app` wraps it in the tower-http stack used by the server.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::activity::activity_router;
use super::catalog::catalog_router;
use super::health::health;
use super::learner::learner_router;
use super::middleware::{expose_error_details, learner_context, LearnerContext};
use super::state::AppState;
use crate::config::ServerConfig;

/// All routes with state and learner context applied, without transport layers.
pub fn api_router(state: AppState, learner: LearnerContext) -> Router {
    let verbose_errors = state.features.verbose_errors;

    let router = Router::new()
        .route("/health", get(health))
        .merge(catalog_router())
        .merge(activity_router())
        .merge(learner_router())
        .with_state(state)
        .layer(middleware::from_fn_with_state(learner, learner_context));

    if verbose_errors {
        router.layer(middleware::from_fn(expose_error_details))
    } else {
        router
    }
}

/// The full application: API routes plus tracing, CORS, timeout, request id
/// and compression.
pub fn app(state: AppState, learner: LearnerContext, server: &ServerConfig) -> Router {
    let enable_tracing = state.features.enable_tracing;

    let router = api_router(state, learner)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()));

    let router = if enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
