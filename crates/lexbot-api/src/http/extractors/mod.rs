//! Request extractors for the REST API.

pub mod json;
