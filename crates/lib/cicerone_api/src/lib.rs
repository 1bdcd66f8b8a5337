//! # cicerone_api
//!
//! HTTP API library for Cicerone.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use sqlx::SqlitePool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, favorites, guide, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: SqlitePool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `cicerone_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    cicerone_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/guide", post(guide::guide_handler))
        .route("/chat", post(chat::chat_handler))
        .route(
            "/favorites",
            post(favorites::create_favorite_handler)
                .get(favorites::list_favorites_handler)
                .delete(favorites::clear_favorites_handler),
        )
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origin list (`*` = any).
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
