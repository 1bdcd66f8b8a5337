//! Guide generation and chat orchestration.
//!
//! Builds persona-scoped prompts, dispatches them to a text-generation
//! provider, and handles the `save <place>` directive embedded in chat
//! input.
//!
//! # Providers
//!
//! - `"gemini"` — Google Gemini `generateContent` REST API
//! - `"local"` — deterministic canned replies (offline, no external deps)
//!
//! The orchestrator owns no session state: callers supply the full turn
//! history on every [`chat`] call.

pub mod gemini;
pub mod intent;
pub mod local;
pub mod prompt;
pub mod provider;

use std::env;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::favorites::{self, FavoritesError};

/// Errors that can occur during guide operations.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("Remote generation failed: {0}")]
    Remote(String),

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Which provider to use and how to reach it.
///
/// Immutable after startup; clone per request to apply a caller-supplied
/// key override.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// Provider name: `"gemini"` or `"local"`.
    pub provider: String,
    /// Gemini API key (required when provider is `"gemini"`).
    pub gemini_api_key: Option<String>,
    /// Model name used in the request path.
    pub model: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl GuideConfig {
    /// Env-var constructor.
    ///
    /// | Variable                | Default                   |
    /// |-------------------------|---------------------------|
    /// | `GUIDE_PROVIDER`        | `gemini`                  |
    /// | `GEMINI_API_KEY`        | —                         |
    /// | `GEMINI_MODEL`          | `gemini-1.5-flash-latest` |
    /// | `GUIDE_TIMEOUT_SECONDS` | `30`                      |
    ///
    /// Credential presence is not checked here — the API config layer
    /// validates it once at startup.
    pub fn from_env() -> Self {
        Self {
            provider: env::var("GUIDE_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash-latest".to_string()),
            timeout_seconds: env::var("GUIDE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Role of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single turn of a conversation, supplied in full by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Generate a city guide.
///
/// Builds the fixed persona-and-task prompt for `city` and returns the
/// provider's response text verbatim — no post-processing, no truncation.
pub async fn generate_guide(config: &GuideConfig, city: &str) -> Result<String, GuideError> {
    let turns = [ChatTurn {
        role: Role::User,
        content: prompt::guide_prompt(city),
    }];

    provider::complete(config, None, &turns, prompt::GUIDE_TEMPERATURE).await
}

/// Relay a chat exchange to the provider.
///
/// The most recent user turn is scanned for a `save <place>` directive.
/// When one is present, the place is written to the favorites store after
/// the provider call succeeds (never speculatively), and the save outcome
/// is folded into the head of the reply text. A duplicate place never
/// fails the exchange; only a provider failure is surfaced as an error.
pub async fn chat(
    pool: &SqlitePool,
    config: &GuideConfig,
    turns: &[ChatTurn],
    city_context: Option<&str>,
) -> Result<String, GuideError> {
    let city_context = city_context.map(str::trim).filter(|c| !c.is_empty());

    let directive = turns
        .iter()
        .rev()
        .find(|t| t.role == Role::User)
        .and_then(|t| intent::parse_save_directive(&t.content));

    let system = prompt::chat_system(city_context);
    let reply = provider::complete(config, Some(&system), turns, prompt::CHAT_TEMPERATURE).await?;

    let Some(place) = directive else {
        return Ok(reply);
    };

    let city = city_context.unwrap_or("unknown");
    let ack = match favorites::add(pool, city, &place).await {
        Ok(id) => {
            info!(id, city, %place, "favorite saved from chat directive");
            format!("✅ **{place}** has been saved to your favorites!")
        }
        Err(FavoritesError::DuplicatePlace(_)) => {
            format!("🤔 Looks like **{place}** is already in your favorites list.")
        }
        Err(e) => {
            warn!("favorite save failed during chat: {e}");
            format!("🚨 An error occurred: {e}")
        }
    };

    Ok(format!("{ack}\n\n{reply}"))
}
