//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use lexbot_types::error::BotError;

use crate::http::response::{ApiResponse, SERVER_ERROR, VALIDATION_ERROR};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be bound.
    Validation(String),
    /// A remote call in a bot workflow failed.
    Bot(BotError),
}

impl From<BotError> for AppError {
    fn from(e: BotError) -> Self {
        AppError::Bot(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure(msg, VALIDATION_ERROR),
            ),
            AppError::Bot(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure(e.to_string(), SERVER_ERROR),
            ),
        };

        (status, Json(body)).into_response()
    }
}
