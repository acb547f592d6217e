//! HTTP adapter - REST API over axum.
//!
//! Each feature has its own handlers and router; [`router`] merges them.

pub mod activity;
pub mod catalog;
pub mod error;
pub mod health;
pub mod learner;
pub mod middleware;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApiError, ErrorResponse};
pub use middleware::LearnerContext;
pub use router::{api_router, app};
pub use state::AppState;
