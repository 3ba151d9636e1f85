//! Configuration loading from the environment and an optional `.env` file.

use std::env;

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable holding the API credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV_VAR: &str = "OPENAI_MODEL";

/// Environment variable overriding the API root.
pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Runtime configuration for the language model client.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load `.env` from the current directory (if present), then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env loaded: {}", e),
        }
        Self::from_env()
    }

    /// Read configuration from the process environment only.
    ///
    /// An empty `OPENAI_API_KEY` counts as missing. Empty optional values
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = non_empty_var(API_KEY_ENV_VAR).ok_or(ConfigError::MissingApiKey)?;
        let model = non_empty_var(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty_var(BASE_URL_ENV_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}
