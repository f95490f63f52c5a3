//! Error types for the debate analysis proxy.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`GatewayError`]: AI gateway transport and status errors
//! - [`AnalysisError`]: Errors surfaced by [`crate::analysis::DebateAnalyzer`]
//! - [`ConfigError`]: Configuration errors
//!
//! Unparseable model output has no variant here: it becomes a degraded
//! result, never an error.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

use crate::config::API_KEY_VAR;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Gateway error.
    #[error("AI gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP server failed to bind or run.
    #[error("Server error: {message}")]
    Server {
        /// Description of the server failure.
        message: String,
    },
}

/// AI gateway errors.
///
/// These errors represent failures when communicating with the upstream
/// chat-completions service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Upstream returned 429.
    #[error("Rate limited{}", retry_hint(.retry_after_seconds))]
    RateLimited {
        /// Seconds to wait before retrying, when the upstream said so.
        retry_after_seconds: Option<u64>,
    },

    /// Upstream returned 402.
    #[error("Quota exhausted")]
    QuotaExhausted,

    /// Upstream returned some other non-success status.
    #[error("Status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Request rejected before sending.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Success status but the envelope could not be decoded.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

#[allow(clippy::ref_option)]
fn retry_hint(retry_after_seconds: &Option<u64>) -> String {
    retry_after_seconds.map_or_else(String::new, |s| format!(": retry after {s}s"))
}

/// Errors returned by [`crate::analysis::DebateAnalyzer::analyze`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No gateway credential is configured.
    #[error("{var} is not configured")]
    Configuration {
        /// The missing variable name.
        var: String,
    },

    /// The request itself is unusable.
    #[error("Invalid analysis request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },

    /// Upstream rate limit hit; the caller should back off.
    #[error("Rate limit exceeded")]
    RateLimited {
        /// Seconds to wait before retrying, when known.
        retry_after_seconds: Option<u64>,
    },

    /// Upstream credits are exhausted; needs operator action.
    #[error("AI credits exhausted")]
    QuotaExhausted,

    /// Opaque upstream failure.
    #[error("AI gateway error: {status}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
    },

    /// The upstream could not be reached or answered garbage.
    #[error("AI gateway unreachable: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

impl AnalysisError {
    /// Build a configuration error for the gateway API key.
    #[must_use]
    pub fn missing_api_key() -> Self {
        Self::Configuration {
            var: API_KEY_VAR.to_string(),
        }
    }

    /// Returns true if the caller may retry the same request later.
    ///
    /// Rate limiting and transport errors are retryable. Quota, configuration
    /// and upstream status errors are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Transport { .. })
    }
}

impl From<GatewayError> for AnalysisError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited {
                retry_after_seconds,
            } => Self::RateLimited {
                retry_after_seconds,
            },
            GatewayError::QuotaExhausted => Self::QuotaExhausted,
            GatewayError::Status { status, .. } => Self::Upstream { status },
            GatewayError::InvalidRequest { message } => Self::InvalidRequest { reason: message },
            e @ (GatewayError::Timeout { .. }
            | GatewayError::Network { .. }
            | GatewayError::UnexpectedResponse { .. }) => Self::Transport {
                message: e.to_string(),
            },
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
