//! HTTP adapter for answering questions and completing modules.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnswerResponse, CompletionReport, SubmitAnswerRequest};
pub use routes::activity_router;
