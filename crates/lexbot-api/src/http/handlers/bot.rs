//! Bot handlers for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use tracing::Instrument;

use lexbot_core::repository::bot::BotModelRepository;
use lexbot_types::bot::{CreateBotRequest, UpdateBotRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::JsonBody;
use crate::http::response::{ApiResponse, BOT_CREATED, BOT_UPDATED};
use crate::state::AppState;

/// POST / - Create a new bot and publish its alias.
pub async fn create_bot<R: BotModelRepository + 'static>(
    State(state): State<AppState<R>>,
    JsonBody(body): JsonBody<CreateBotRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("create_bot", %request_id, bot = %body.name);

    state
        .bot_service
        .create_bot(body)
        .instrument(span)
        .await?;

    tracing::debug!(%request_id, elapsed_ms = start.elapsed().as_millis() as u64, "create complete");
    Ok(Json(ApiResponse::success(BOT_CREATED)))
}

/// PUT / - Define a new intent and attach it to an existing bot.
pub async fn update_bot<R: BotModelRepository + 'static>(
    State(state): State<AppState<R>>,
    JsonBody(body): JsonBody<UpdateBotRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!(
        "update_bot",
        %request_id,
        bot = %body.name,
        intent = %body.intent_name
    );

    state
        .bot_service
        .update_bot(body)
        .instrument(span)
        .await?;

    tracing::debug!(%request_id, elapsed_ms = start.elapsed().as_millis() as u64, "update complete");
    Ok(Json(ApiResponse::success(BOT_UPDATED)))
}
