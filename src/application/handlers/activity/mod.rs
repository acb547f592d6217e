//! Learning activity command handlers.
//!
//! Both handlers mutate the same progress records and share one
//! [`ProgressLocks`] instance.

mod complete_module;
mod progress_locks;
mod submit_answer;

pub use complete_module::{CompleteModuleCommand, CompleteModuleHandler, CompleteModuleResult};
pub use progress_locks::ProgressLocks;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
