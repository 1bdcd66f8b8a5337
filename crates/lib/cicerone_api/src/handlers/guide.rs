//! Guide request handler.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use chrono::Utc;
use tracing::info;

use cicerone_core::guide::{self, GuideConfig};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CityRequest, GuideResponse};

/// Minimum plausible length for a caller-supplied API key.
const MIN_KEY_LEN: usize = 10;

/// Extract a caller-supplied Gemini key from `Authorization: Bearer <key>`.
///
/// An absent header is fine (the configured key is used); a present but
/// implausibly short key is rejected outright.
pub(crate) fn bearer_key(headers: &HeaderMap) -> Result<Option<String>, AppError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::InvalidInput("Malformed authorization header".into()))?;
    let key = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::InvalidInput("Invalid authorization scheme".into()))?;

    if key.len() < MIN_KEY_LEN {
        return Err(AppError::InvalidInput("Invalid API key format".into()));
    }

    Ok(Some(key.to_string()))
}

/// The configured guide config with an optional caller-supplied key
/// swapped in for this request.
pub(crate) fn request_guide_config(
    base: &GuideConfig,
    headers: &HeaderMap,
) -> Result<GuideConfig, AppError> {
    let mut config = base.clone();
    if let Some(key) = bearer_key(headers)? {
        config.gemini_api_key = Some(key);
    }
    Ok(config)
}

/// `POST /guide` — generate a city guide.
pub async fn guide_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CityRequest>,
) -> AppResult<Json<GuideResponse>> {
    let city = body.city.trim();
    if city.is_empty() {
        return Err(AppError::InvalidInput("city must not be empty".into()));
    }

    info!(city, "generating guide");
    let config = request_guide_config(&state.config.guide, &headers)?;
    let guide_content = guide::generate_guide(&config, city).await?;

    Ok(Json(GuideResponse {
        guide_content,
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn absent_header_uses_configured_key() {
        let key = bearer_key(&HeaderMap::new()).expect("no header is fine");
        assert!(key.is_none());
    }

    #[test]
    fn bearer_key_extracted() {
        let headers = headers_with_auth("Bearer a-plausible-api-key");
        let key = bearer_key(&headers).expect("valid key");
        assert_eq!(key.as_deref(), Some("a-plausible-api-key"));
    }

    #[test]
    fn short_key_rejected() {
        let headers = headers_with_auth("Bearer short");
        assert!(bearer_key(&headers).is_err());
    }

    #[test]
    fn non_bearer_scheme_rejected() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert!(bearer_key(&headers).is_err());
    }

    #[test]
    fn override_replaces_configured_key() {
        let base = GuideConfig {
            provider: "gemini".to_string(),
            gemini_api_key: Some("configured-key-value".to_string()),
            model: "gemini-1.5-flash-latest".to_string(),
            timeout_seconds: 30,
        };
        let headers = headers_with_auth("Bearer caller-key-value");

        let config = request_guide_config(&base, &headers).expect("override");
        assert_eq!(config.gemini_api_key.as_deref(), Some("caller-key-value"));

        let config = request_guide_config(&base, &HeaderMap::new()).expect("no override");
        assert_eq!(
            config.gemini_api_key.as_deref(),
            Some("configured-key-value")
        );
    }
}
