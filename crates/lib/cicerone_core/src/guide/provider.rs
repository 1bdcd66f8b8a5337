//! Provider dispatch — routes generation requests to the correct provider.

use super::{ChatTurn, GuideConfig, GuideError, gemini, local};

/// Send a conversation to the configured provider and return its reply
/// text.
///
/// Dispatches based on `config.provider`:
/// - `"gemini"` → Google Gemini REST API
/// - `"local"` → deterministic canned text
pub async fn complete(
    config: &GuideConfig,
    system: Option<&str>,
    turns: &[ChatTurn],
    temperature: f32,
) -> Result<String, GuideError> {
    match config.provider.as_str() {
        "local" => Ok(local::complete(system, turns)),
        "gemini" => gemini::complete(config, system, turns, temperature).await,
        other => Err(GuideError::UnsupportedProvider(other.to_string())),
    }
}
