//! In-memory adapters.
//!
//! The catalog is seeded from YAML; progress and learners live in maps for the
//! lifetime of the process.

mod content_catalog;
mod learner_repository;
mod progress_store;
mod seed;

pub use content_catalog::InMemoryContentCatalog;
pub use learner_repository::InMemoryLearnerRepository;
pub use progress_store::InMemoryProgressStore;
pub use seed::{embedded_catalog, load_catalog, load_catalog_file, parse_catalog, SeedError};
