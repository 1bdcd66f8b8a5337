//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use chrono::Utc;
use tracing::info;

use cicerone_core::guide;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::guide::request_guide_config;
use crate::models::{ChatRequest, ChatResponse};

/// `POST /chat` — continue a conversation with the guide.
///
/// The orchestrator scans the latest user turn for a `save <place>`
/// directive; save outcomes are folded into the reply text, so the only
/// structural failures here are validation and the remote call itself.
pub async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if body.messages.is_empty() {
        return Err(AppError::InvalidInput("messages must not be empty".into()));
    }

    info!(turns = body.messages.len(), "processing chat request");
    let config = request_guide_config(&state.config.guide, &headers)?;
    let response = guide::chat(
        &state.pool,
        &config,
        &body.messages,
        body.city_context.as_deref(),
    )
    .await?;

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now(),
    }))
}
