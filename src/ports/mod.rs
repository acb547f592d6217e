//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentCatalog` - Read-only categories, modules and questions
//! - `ProgressStore` - Per (learner, module) progress records
//! - `LearnerRepository` - Learners and lifetime points

mod content_catalog;
mod learner_repository;
mod progress_store;

pub use content_catalog::{CategorySummary, CategoryWithModules, ContentCatalog, ModuleWithQuestions};
pub use learner_repository::LearnerRepository;
pub use progress_store::ProgressStore;
