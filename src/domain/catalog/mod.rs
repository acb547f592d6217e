//! Catalog module - Static learning content.
//!
//! Categories own modules, modules own an ordered sequence of questions.
//! Content is immutable once loaded; unset authored values resolve through
//! [`CatalogDefaults`].

mod category;
mod content;
mod defaults;
mod errors;
mod learning_module;
mod question;

pub use category::{Category, CategoryKind};
pub use content::CatalogContent;
pub use defaults::CatalogDefaults;
pub use errors::CatalogError;
pub use learning_module::{AgeGroup, LearningModule};
pub use question::{Question, QuestionKind};
