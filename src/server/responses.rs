//! Response bodies and the error-to-HTTP mapping.

use axum::http::{header::RETRY_AFTER, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Client-facing message for an upstream 429.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// Client-facing message for an upstream 402.
pub const QUOTA_EXHAUSTED_MESSAGE: &str = "AI credits exhausted. Please add funds.";

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether a gateway credential is present.
    pub gateway_configured: bool,
}

/// An analysis failure rendered as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub AnalysisError);

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.0 {
            AnalysisError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AnalysisError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            AnalysisError::Configuration { .. }
            | AnalysisError::InvalidRequest { .. }
            | AnalysisError::Upstream { .. }
            | AnalysisError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.0 {
            AnalysisError::RateLimited { .. } => RATE_LIMIT_MESSAGE.to_string(),
            AnalysisError::QuotaExhausted => QUOTA_EXHAUSTED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        let mut response = (self.status(), Json(body)).into_response();

        if let AnalysisError::RateLimited {
            retry_after_seconds: Some(seconds),
        } = self.0
        {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(seconds));
        }

        response
    }
}
