//! HTTP middleware for axum.
//!
//! - `learner` - Default learner context and its extractor
//! - `errors` - Optional internal error details

pub mod errors;
pub mod learner;

pub use errors::expose_error_details;
pub use learner::{learner_context, CurrentLearner, LearnerContext};
