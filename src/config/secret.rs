//! Gateway credential wrapper.
//!
//! [`ApiKey`] keeps the gateway key out of `Debug`/`Display` output so that a
//! stray `?config` in a log line never leaks it.

use std::fmt;

/// Gateway API key, redacted when formatted.
///
/// # Example
///
/// ```
/// use debate_analyst::config::ApiKey;
///
/// let key = ApiKey::new("lk-123").expect("non-empty");
/// assert_eq!(format!("{key:?}"), "ApiKey(<REDACTED>)");
/// assert_eq!(key.bearer(), "Bearer lk-123");
/// assert!(ApiKey::new("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key. Blank input yields `None`, matching an unset variable.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw key. Only the gateway client should call this.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for bearer auth.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<REDACTED>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}
