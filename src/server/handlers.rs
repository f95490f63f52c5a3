//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use super::requests::AnalyzeDebateBody;
use super::responses::{ApiError, HealthStatus};
use super::AppState;
use crate::analysis::AnalysisOutput;
use crate::error::AnalysisError;
use crate::traits::CompletionClient;

/// `POST /analyze-debate`.
///
/// The credential check runs before the body is parsed. The body is decoded
/// by hand so malformed JSON maps onto the same `{"error"}` shape as every
/// other failure.
///
/// # Errors
///
/// Returns [`ApiError`] for a missing credential, an unusable body, or an
/// upstream failure.
pub async fn analyze_debate<C>(
    State(state): State<AppState<C>>,
    body: Bytes,
) -> Result<Json<AnalysisOutput>, ApiError>
where
    C: CompletionClient + 'static,
{
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("analyze_debate", %request_id);
    run_analysis(&state, &body).instrument(span).await
}

async fn run_analysis<C>(
    state: &AppState<C>,
    body: &[u8],
) -> Result<Json<AnalysisOutput>, ApiError>
where
    C: CompletionClient + 'static,
{
    if !state.analyzer.is_configured() {
        tracing::error!("Rejecting request: gateway credential missing");
        return Err(AnalysisError::missing_api_key().into());
    }

    let payload: AnalyzeDebateBody = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Malformed request body");
        AnalysisError::InvalidRequest {
            reason: e.to_string(),
        }
    })?;

    let output = state.analyzer.analyze(&payload.into_request()).await?;
    tracing::info!(
        findings = output.finding_count(),
        degraded = output.is_degraded(),
        "Analysis complete"
    );

    Ok(Json(output))
}

/// `OPTIONS /analyze-debate`: empty `200`.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `GET /health`.
pub async fn health<C>(State(state): State<AppState<C>>) -> Json<HealthStatus>
where
    C: CompletionClient + 'static,
{
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gateway_configured: state.analyzer.is_configured(),
    })
}
