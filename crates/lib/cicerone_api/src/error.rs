//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cicerone_core::favorites::FavoritesError;
use cicerone_core::guide::GuideError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate place: {0}")]
    DuplicatePlace(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Remote generation failed: {0}")]
    RemoteGeneration(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::InvalidInput(m) => (StatusCode::BAD_REQUEST, "invalid_input", m.as_str()),
            AppError::DuplicatePlace(m) => (StatusCode::CONFLICT, "duplicate_place", m.as_str()),
            AppError::StorageUnavailable(m) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "storage_unavailable",
                m.as_str(),
            ),
            AppError::RemoteGeneration(m) => {
                (StatusCode::BAD_GATEWAY, "remote_generation", m.as_str())
            }
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<FavoritesError> for AppError {
    fn from(e: FavoritesError) -> Self {
        match e {
            FavoritesError::InvalidInput(m) => AppError::InvalidInput(m),
            FavoritesError::DuplicatePlace(place) => {
                AppError::DuplicatePlace(format!("'{place}' is already in the favorites list"))
            }
            FavoritesError::Unavailable(e) => AppError::StorageUnavailable(e.to_string()),
        }
    }
}

impl From<GuideError> for AppError {
    fn from(e: GuideError) -> Self {
        match e {
            GuideError::Remote(m) => AppError::RemoteGeneration(m),
            GuideError::UnsupportedProvider(p) => {
                AppError::Internal(format!("unsupported provider: {p}"))
            }
            GuideError::Config(m) => AppError::Internal(m),
        }
    }
}
