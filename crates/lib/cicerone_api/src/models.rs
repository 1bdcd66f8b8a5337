//! Request and response bodies for the REST API.

use chrono::{DateTime, Utc};
use cicerone_core::favorites::FavoriteRow;
use cicerone_core::guide::ChatTurn;
use serde::{Deserialize, Serialize};

/// Body of `POST /guide`.
#[derive(Debug, Deserialize)]
pub struct CityRequest {
    pub city: String,
}

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
    #[serde(default)]
    pub city_context: Option<String>,
}

/// Body of `POST /favorites`.
#[derive(Debug, Deserialize)]
pub struct SaveFavoriteRequest {
    pub city: String,
    pub place_name: String,
}

/// Response of `POST /guide`.
#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub guide_content: String,
    pub timestamp: DateTime<Utc>,
}

/// Response of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// A stored favorite as returned by the API.
#[derive(Debug, Serialize)]
pub struct FavoriteDto {
    pub id: i64,
    pub city: String,
    pub place_name: String,
}

impl From<FavoriteRow> for FavoriteDto {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            city: row.city,
            place_name: row.place_name,
        }
    }
}

/// Response of `POST /favorites`.
#[derive(Debug, Serialize)]
pub struct FavoriteCreatedResponse {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Response of `GET /favorites`.
#[derive(Debug, Serialize)]
pub struct FavoritesListResponse {
    pub favorites: Vec<FavoriteDto>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Response of `DELETE /favorites`.
#[derive(Debug, Serialize)]
pub struct FavoritesClearedResponse {
    pub cleared: u64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub db_connected: bool,
    pub timestamp: DateTime<Utc>,
}

/// JSON error body shared by all failure responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
