//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support via `dotenvy`)
//! - Configuration validation
//! - Default value handling
//! - Redacted API key storage via [`ApiKey`]
//!
//! The gateway key is optional at load time. A server without one still
//! starts; every analysis request then fails with a configuration error.
//!
//! # Example
//!
//! ```
//! use debate_analyst::config::{ApiKey, Config};
//!
//! let config = Config::default().with_api_key(ApiKey::new("lk-example"));
//! assert!(config.has_api_key());
//! assert!(!format!("{config:?}").contains("lk-example"));
//! ```

mod secret;
mod validation;

pub use secret::ApiKey;
pub use validation::{
    validate_config, MAX_TEMPERATURE, MAX_TIMEOUT_MS, MIN_TEMPERATURE, MIN_TIMEOUT_MS,
};

use crate::error::ConfigError;

/// Environment variable holding the gateway API key.
pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";

/// Default gateway base URL (OpenAI-compatible).
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Default sampling temperature for analysis.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default upstream request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Gateway API key; `None` when unset or blank.
    pub api_key: Option<ApiKey>,
    /// Gateway base URL, without the `/chat/completions` suffix.
    pub gateway_url: String,
    /// Model to request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upstream request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Socket address to listen on.
    pub bind_addr: String,
    /// Log filter directive (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `AI_GATEWAY_API_KEY`: gateway credential (default: unset)
    /// - `AI_GATEWAY_URL`: gateway base URL (default: `https://ai.gateway.lovable.dev/v1`)
    /// - `AI_GATEWAY_MODEL`: model (default: `google/gemini-2.5-flash`)
    /// - `AI_GATEWAY_TIMEOUT_MS`: upstream timeout (default: `60000`)
    /// - `ANALYSIS_TEMPERATURE`: sampling temperature (default: `0.3`)
    /// - `BIND_ADDR`: listen address (default: `0.0.0.0:8080`)
    /// - `LOG_LEVEL`: logging level (default: `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse or any
    /// value fails [`validate_config`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Self {
            api_key: std::env::var(API_KEY_VAR).ok().and_then(ApiKey::new),
            gateway_url: env_or("AI_GATEWAY_URL", DEFAULT_GATEWAY_URL),
            model: env_or("AI_GATEWAY_MODEL", DEFAULT_MODEL),
            temperature: parse_env("ANALYSIS_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            request_timeout_ms: parse_env("AI_GATEWAY_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?,
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            log_level: env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Replace the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Set the gateway base URL.
    #[must_use]
    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = url.into();
        self
    }

    /// Whether a gateway credential is present.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, using a default if not set.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: format!("could not parse {val:?}"),
        })
    })
}
