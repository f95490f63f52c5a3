//! Gateway client configuration.

#![allow(clippy::missing_const_for_fn)]

use crate::config::{Config, DEFAULT_GATEWAY_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};

/// Client configuration for the AI gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Model used when a call does not name one.
    pub default_model: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive client settings from application config.
    #[must_use]
    pub fn from_app_config(config: &Config) -> Self {
        Self {
            base_url: config.gateway_url.clone(),
            default_model: config.model.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    /// Set base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the default model.
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Full chat-completions endpoint.
    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
