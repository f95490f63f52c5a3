//! Debate analysis.
//!
//! [`DebateAnalyzer`] turns an [`AnalysisRequest`] into an
//! [`AnalysisOutput`] with one upstream completion call:
//!
//! 1. Refuse early if no gateway credential is configured
//! 2. Build the system instruction plus the mode-specific user instruction
//! 3. Call the completion client exactly once
//! 4. Parse the reply tolerantly, degrading instead of failing
//!
//! Only credential, transport, and upstream status failures are errors.
//! A JSON object reply is returned as the model wrote it. A reply that is
//! not a JSON object still yields a well-formed [`AnalysisResult`].

mod parsing;
mod types;

pub use parsing::{parse_analysis, preview, ParseOutcome};
pub use types::{
    AnalysisMode, AnalysisOutput, AnalysisRequest, AnalysisResult, ArgumentAssessment,
    ArgumentStrength, FactCheckFinding, FactCheckStatus, FallacyFinding,
};

use crate::config::{ApiKey, Config, DEFAULT_TEMPERATURE};
use crate::error::AnalysisError;
use crate::prompts::{system_prompt, user_prompt};
use crate::traits::{CompletionClient, CompletionConfig, Message};

/// Characters of model output included in debug logs.
pub const LOG_PREVIEW_CHARS: usize = 200;

/// Generation settings applied to every analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Model override; the client's default is used when `None`.
    pub model: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            model: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl AnalyzerSettings {
    /// Take model and temperature from application config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: Some(config.model.clone()),
            temperature: config.temperature,
        }
    }
}

/// Stateless debate analyzer.
///
/// # Example
///
/// ```
/// use debate_analyst::analysis::{AnalyzerSettings, DebateAnalyzer};
/// use debate_analyst::gateway::{ClientConfig, GatewayClient};
///
/// let client = GatewayClient::new(ClientConfig::new()).expect("client builds");
/// let analyzer = DebateAnalyzer::new(client, None, AnalyzerSettings::default());
/// assert!(!analyzer.is_configured());
/// ```
pub struct DebateAnalyzer<C>
where
    C: CompletionClient,
{
    client: C,
    api_key: Option<ApiKey>,
    settings: AnalyzerSettings,
}

impl<C> DebateAnalyzer<C>
where
    C: CompletionClient,
{
    /// Create a new analyzer.
    #[must_use]
    pub const fn new(client: C, api_key: Option<ApiKey>, settings: AnalyzerSettings) -> Self {
        Self {
            client,
            api_key,
            settings,
        }
    }

    /// Whether a gateway credential is present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Analyze a debate message or transcript.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] if:
    /// - No API key is configured (checked before anything else)
    /// - The text is empty or exceeds the gateway's size limits
    /// - The upstream rate limits, runs out of quota, or answers non-2xx
    /// - The upstream cannot be reached
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisOutput, AnalysisError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(AnalysisError::missing_api_key)?;

        if request.text.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest {
                reason: "message must not be empty".into(),
            });
        }

        tracing::info!(mode = %request.mode, chars = request.text.len(), "Running debate analysis");

        let messages = vec![
            Message::system(system_prompt()),
            Message::user(user_prompt(
                request.mode,
                &request.text,
                request.context.as_deref(),
            )),
        ];

        let mut config = CompletionConfig::new().with_temperature(self.settings.temperature);
        if let Some(model) = &self.settings.model {
            config = config.with_model(model);
        }

        let response = self
            .client
            .complete(api_key, messages, config)
            .await
            .map_err(|e| {
                tracing::error!(mode = %request.mode, error = %e, "Analysis upstream call failed");
                AnalysisError::from(e)
            })?;

        tracing::debug!(
            mode = %request.mode,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            total_tokens = response.usage.total(),
            preview = %preview(&response.content, LOG_PREVIEW_CHARS),
            "Analysis response received"
        );

        let outcome = parse_analysis(&response.content);
        if outcome.is_degraded() {
            tracing::warn!(mode = %request.mode, "Model output was not an analysis object, degrading");
        }

        Ok(outcome.into_output())
    }
}

impl<C> std::fmt::Debug for DebateAnalyzer<C>
where
    C: CompletionClient,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebateAnalyzer")
            .field("client", &"CompletionClient")
            .field("api_key", &self.api_key)
            .field("settings", &self.settings)
            .finish()
    }
}
