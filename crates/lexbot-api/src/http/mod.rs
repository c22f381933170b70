//! HTTP/REST API layer for lexbot.
//!
//! Axum-based API at `/` with a fixed `{error, message}` envelope and CORS
//! support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
