//! Health endpoint.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::AppState;
use crate::error::AppResult;
use crate::models::HealthResponse;

/// `GET /health` — liveness plus a database connectivity probe.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let db_connected = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: cicerone_core::version().to_string(),
        db_connected,
        timestamp: Utc::now(),
    }))
}
