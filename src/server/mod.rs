//! HTTP server.
//!
//! Routes:
//! - `POST /analyze-debate`: run an analysis, returns [`AnalysisOutput`] JSON
//! - `OPTIONS /analyze-debate`: empty `200`
//! - `GET /health`: liveness plus whether a credential is configured
//!
//! CORS is permissive: any origin may call, and the CORS layer answers
//! preflight requests itself.
//!
//! # Example
//!
//! ```no_run
//! use debate_analyst::config::Config;
//! use debate_analyst::server::serve;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`AnalysisOutput`]: crate::analysis::AnalysisOutput

mod handlers;
mod requests;
mod responses;

pub use handlers::{analyze_debate, health, preflight};
pub use requests::AnalyzeDebateBody;
pub use responses::{
    ApiError, ErrorBody, HealthStatus, QUOTA_EXHAUSTED_MESSAGE, RATE_LIMIT_MESSAGE,
};

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::analysis::{AnalyzerSettings, DebateAnalyzer};
use crate::config::Config;
use crate::error::AppError;
use crate::gateway::{ClientConfig, GatewayClient};
use crate::traits::CompletionClient;

/// Request headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Shared handler state.
pub struct AppState<C = GatewayClient>
where
    C: CompletionClient,
{
    /// The analyzer all requests go through.
    pub analyzer: Arc<DebateAnalyzer<C>>,
}

impl<C> Clone for AppState<C>
where
    C: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

impl<C> AppState<C>
where
    C: CompletionClient,
{
    /// Wrap an analyzer.
    #[must_use]
    pub fn new(analyzer: DebateAnalyzer<C>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

impl AppState<GatewayClient> {
    /// Build the production state from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = GatewayClient::new(ClientConfig::from_app_config(config))?;
        Ok(Self::new(DebateAnalyzer::new(
            client,
            config.api_key.clone(),
            AnalyzerSettings::from_config(config),
        )))
    }
}

/// CORS policy for every route.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static(ALLOWED_HEADERS[1]),
            HeaderName::from_static(ALLOWED_HEADERS[2]),
            CONTENT_TYPE,
        ])
}

/// Build the application router.
pub fn router<C>(state: AppState<C>) -> Router
where
    C: CompletionClient + 'static,
{
    Router::new()
        .route(
            "/analyze-debate",
            post(analyze_debate::<C>).options(preflight),
        )
        .route("/health", get(health::<C>))
        .layer(cors_layer())
        .with_state(state)
}

/// Bind `config.bind_addr` and serve until SIGINT or SIGTERM.
///
/// # Errors
///
/// Returns [`AppError`] if the client cannot be built, the address cannot
/// be bound, or the server fails while running.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let app = router(AppState::from_config(&config)?);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::Server {
            message: format!("failed to bind {}: {e}", config.bind_addr),
        })?;
    info!(addr = %config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server {
            message: e.to_string(),
        })?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
