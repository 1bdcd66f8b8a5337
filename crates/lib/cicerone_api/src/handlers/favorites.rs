//! Favorites request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;

use cicerone_core::favorites;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{
    FavoriteCreatedResponse, FavoriteDto, FavoritesClearedResponse, FavoritesListResponse,
    SaveFavoriteRequest,
};

/// `POST /favorites` — save a place.
pub async fn create_favorite_handler(
    State(state): State<AppState>,
    Json(body): Json<SaveFavoriteRequest>,
) -> AppResult<(StatusCode, Json<FavoriteCreatedResponse>)> {
    let id = favorites::add(&state.pool, &body.city, &body.place_name).await?;
    info!(id, city = %body.city, place = %body.place_name, "favorite saved");

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedResponse {
            id,
            message: format!("{} has been saved to your favorites", body.place_name),
            timestamp: Utc::now(),
        }),
    ))
}

/// `GET /favorites` — list all saved places in insertion order.
pub async fn list_favorites_handler(
    State(state): State<AppState>,
) -> AppResult<Json<FavoritesListResponse>> {
    let rows = favorites::list_all(&state.pool).await?;
    let favorites: Vec<FavoriteDto> = rows.into_iter().map(FavoriteDto::from).collect();

    Ok(Json(FavoritesListResponse {
        count: favorites.len(),
        favorites,
        timestamp: Utc::now(),
    }))
}

/// `DELETE /favorites` — remove every saved place.
pub async fn clear_favorites_handler(
    State(state): State<AppState>,
) -> AppResult<Json<FavoritesClearedResponse>> {
    let cleared = favorites::clear_all(&state.pool).await?;
    info!(cleared, "favorites cleared");

    Ok(Json(FavoritesClearedResponse {
        cleared,
        message: "All favorites have been cleared".to_string(),
        timestamp: Utc::now(),
    }))
}
