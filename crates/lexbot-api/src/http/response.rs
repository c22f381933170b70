//! Envelope response format for all bot endpoints.
//!
//! Every response body has the same two fields:
//! ```json
//! { "error": null, "message": "New Bot Created." }
//! ```
//! `error` carries the underlying failure text and is `null` on success.

use serde::Serialize;

pub const BOT_CREATED: &str = "New Bot Created.";
pub const BOT_UPDATED: &str = "Bot Updated with new intent.";
pub const VALIDATION_ERROR: &str = "Validation Error.";
pub const SERVER_ERROR: &str = "Server Error.";

/// Envelope response wrapping every bot endpoint reply.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    /// Failure detail; always serialized, `null` on success.
    pub error: Option<String>,
    /// Human-readable outcome.
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: &str) -> Self {
        Self {
            error: None,
            message: message.to_string(),
        }
    }

    pub fn failure(error: String, message: &str) -> Self {
        Self {
            error: Some(error),
            message: message.to_string(),
        }
    }
}
