//! API server configuration.

use cicerone_core::guide::GuideConfig;
use thiserror::Error;

/// Errors raised while resolving configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// SQLite connection URL.
    pub database_url: String,
    /// Allowed CORS origins; a `"*"` entry means any origin.
    pub allowed_origins: Vec<String>,
    /// Guide provider configuration.
    pub guide: GuideConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable          | Default                                       |
    /// |-------------------|-----------------------------------------------|
    /// | `BIND_ADDR`       | `127.0.0.1:8080`                              |
    /// | `DATABASE_URL`    | `<platform data dir>/cicerone/favorites.db`   |
    /// | `ALLOWED_ORIGINS` | `*`                                           |
    ///
    /// Guide provider variables are documented on
    /// [`GuideConfig::from_env`]. Fails fast: selecting the gemini
    /// provider without `GEMINI_API_KEY` is a startup error, not a
    /// first-request error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let guide = GuideConfig::from_env();
        if guide.provider == "gemini" && guide.gemini_api_key.is_none() {
            return Err(ConfigError::MissingVar("GEMINI_API_KEY"));
        }

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => cicerone_core::db::default_database_url()
                .map_err(|e| ConfigError::InvalidVar("DATABASE_URL", e.to_string()))?,
        };

        let allowed_origins =
            parse_origins(&std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into()));
        if allowed_origins.is_empty() {
            return Err(ConfigError::InvalidVar(
                "ALLOWED_ORIGINS",
                "no origins configured".into(),
            ));
        }

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            database_url,
            allowed_origins,
            guide,
        })
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
