//! Learner module - The person earning points.

mod errors;
mod learner;

pub use errors::LearnerError;
pub use learner::Learner;
