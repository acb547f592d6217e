//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory catalog, progress and learner storage
//! - `http` - REST API over axum

pub mod http;
pub mod memory;

pub use http::{api_router, app, AppState};
pub use memory::{InMemoryContentCatalog, InMemoryLearnerRepository, InMemoryProgressStore};
