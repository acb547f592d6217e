//! HTTP adapter for the content catalog.

pub mod handlers;
pub mod routes;

pub use routes::catalog_router;
