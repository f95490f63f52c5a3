//! Test utilities and mock factories.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::config::ApiKey;
use crate::error::GatewayError;
use crate::traits::{CompletionResponse, MockCompletionClient, Usage};

/// Key used by every in-crate test.
#[must_use]
pub fn test_key() -> ApiKey {
    ApiKey::new("test-key").expect("non-blank key")
}

/// Create a mock client that always returns `content`.
///
/// # Example
///
/// ```ignore
/// let mock = mock_completion_success("{}");
/// let result = mock.complete(&test_key(), messages, config).await;
/// assert_eq!(result.unwrap().content, "{}");
/// ```
#[must_use]
pub fn mock_completion_success(content: impl Into<String>) -> MockCompletionClient {
    let content = content.into();
    let mut mock = MockCompletionClient::new();
    mock.expect_complete()
        .times(1)
        .returning(move |_key, _msgs, _config| {
            Ok(CompletionResponse::new(content.clone(), Usage::new(120, 80)))
        });
    mock
}

/// Create a mock client that always fails with `error`.
#[must_use]
pub fn mock_completion_error(error: GatewayError) -> MockCompletionClient {
    let mut mock = MockCompletionClient::new();
    mock.expect_complete()
        .times(1)
        .returning(move |_key, _msgs, _config| Err(error.clone()));
    mock
}

/// A well-formed analysis for the solar-versus-coal claim.
#[must_use]
pub fn sample_analysis_json() -> String {
    serde_json::json!({
        "fact_checks": [{
            "claim": "Solar power is always cheaper than coal.",
            "status": "unverified",
            "explanation": "Levelized costs depend on region, storage, and subsidies.",
            "confidence": 0.6
        }],
        "fallacies": [{
            "name": "Hasty Generalization",
            "explanation": "\"Always\" generalizes from favorable markets."
        }],
        "argument_analysis": {
            "strength": "weak",
            "key_points": ["Solar is cheaper than coal"],
            "suggestions": ["Qualify the claim by region", "Cite cost data"]
        }
    })
    .to_string()
}
