//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Categories, modules and questions; static once loaded
//! - `progress` - Answer grading, difficulty adaptation and progress records
//! - `learner` - Learners and their lifetime points

pub mod catalog;
pub mod foundation;
pub mod learner;
pub mod progress;
