//! Configuration validation.
//!
//! Range checks for loaded configuration values.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Lowest accepted sampling temperature.
pub const MIN_TEMPERATURE: f32 = 0.0;

/// Highest accepted sampling temperature.
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `AI_GATEWAY_URL` is not an `http(s)` URL
/// - `AI_GATEWAY_TIMEOUT_MS` is outside 1000..=300000
/// - `ANALYSIS_TEMPERATURE` is outside 0.0..=2.0
/// - `BIND_ADDR` is not a socket address
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !(config.gateway_url.starts_with("http://") || config.gateway_url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            var: "AI_GATEWAY_URL".into(),
            reason: "must start with http:// or https://".into(),
        });
    }

    if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&config.request_timeout_ms) {
        return Err(ConfigError::InvalidValue {
            var: "AI_GATEWAY_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&config.temperature) {
        return Err(ConfigError::InvalidValue {
            var: "ANALYSIS_TEMPERATURE".into(),
            reason: format!("must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE}"),
        });
    }

    if config.bind_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(ConfigError::InvalidValue {
            var: "BIND_ADDR".into(),
            reason: format!("{:?} is not a socket address", config.bind_addr),
        });
    }

    Ok(())
}
