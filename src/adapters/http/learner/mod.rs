//! HTTP adapter for learner stats and progress.

pub mod handlers;
pub mod routes;

pub use routes::learner_router;
