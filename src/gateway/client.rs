//! AI gateway HTTP client.
//!
//! This module provides:
//! - HTTP client for the OpenAI-compatible chat-completions endpoint
//! - Request validation
//! - Status code classification (429, 402, everything else)
//!
//! Exactly one attempt is made per call. Backoff belongs to the caller.

#![allow(clippy::missing_errors_doc)]

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, StatusCode};

use super::config::ClientConfig;
use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::ApiKey;
use crate::error::GatewayError;
use crate::traits::{CompletionClient, CompletionConfig, CompletionResponse, Message, Usage};

/// Maximum number of messages per request.
pub const MAX_MESSAGES: usize = 50;
/// Maximum content length per message (200KB, room for long transcripts).
pub const MAX_CONTENT_LENGTH: usize = 200_000;

/// Chat-completions client.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    config: ClientConfig,
}

impl GatewayClient {
    /// Create a new gateway client.
    pub fn new(config: ClientConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GatewayError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Send a chat request and decode the envelope.
    pub async fn send(
        &self,
        api_key: &ApiKey,
        request: &ChatRequest,
    ) -> Result<ChatResponse, GatewayError> {
        Self::validate_request(request)?;

        let url = self.config.completions_url();
        let start = Instant::now();

        tracing::debug!(
            url = %url,
            model = %request.model,
            messages = request.messages.len(),
            timeout_ms = self.config.timeout_ms,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, api_key.bearer())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = elapsed_ms(start);
                if e.is_timeout() {
                    tracing::error!(url = %url, elapsed_ms, "AI gateway request timed out");
                    GatewayError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::error!(url = %url, elapsed_ms, error = %e, "AI gateway request failed");
                    GatewayError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        tracing::debug!(status = %status, elapsed_ms = elapsed_ms(start), "AI gateway responded");

        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "AI gateway error");
            return Err(classify_status(status, retry_after, body));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| GatewayError::UnexpectedResponse {
                message: format!("Failed to parse response: {e}"),
            })
    }

    /// Validate request size limits.
    fn validate_request(request: &ChatRequest) -> Result<(), GatewayError> {
        if request.messages.len() > MAX_MESSAGES {
            return Err(GatewayError::InvalidRequest {
                message: format!(
                    "Too many messages: {} > {MAX_MESSAGES}",
                    request.messages.len()
                ),
            });
        }

        if let Some(msg) = request
            .messages
            .iter()
            .find(|m| m.content.len() > MAX_CONTENT_LENGTH)
        {
            return Err(GatewayError::InvalidRequest {
                message: format!(
                    "Message too large: {} > {MAX_CONTENT_LENGTH}",
                    msg.content.len()
                ),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl CompletionClient for GatewayClient {
    async fn complete(
        &self,
        api_key: &ApiKey,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, GatewayError> {
        let model = config
            .model
            .unwrap_or_else(|| self.config.default_model.clone());
        let messages = messages
            .into_iter()
            .map(|m| ChatMessage {
                role: m.role,
                content: m.content,
            })
            .collect();

        let mut request = ChatRequest::new(model, messages);
        if let Some(temperature) = config.temperature {
            request = request.with_temperature(temperature);
        }

        let response = self.send(api_key, &request).await?;

        let content = response.first_content().map(str::to_owned);
        if content.is_none() {
            tracing::warn!(
                choices = response.choices.len(),
                "AI gateway response carried no text content"
            );
        }
        let usage = response.usage.unwrap_or_default();

        Ok(CompletionResponse::new(
            content.unwrap_or_default(),
            Usage::new(usage.prompt_tokens, usage.completion_tokens),
        ))
    }
}

fn classify_status(status: StatusCode, retry_after: Option<u64>, body: String) -> GatewayError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited {
            retry_after_seconds: retry_after,
        },
        StatusCode::PAYMENT_REQUIRED => GatewayError::QuotaExhausted,
        other => GatewayError::Status {
            status: other.as_u16(),
            body,
        },
    }
}

/// Delta-seconds form only; HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
