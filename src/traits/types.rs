//! Shared types for the completion seam.
//!
//! - [`Message`]: provider-neutral chat message
//! - [`CompletionConfig`]: per-call generation settings
//! - [`CompletionResponse`]: generated text plus usage
//! - [`Usage`]: token counts

/// Message for completion requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Role of the message sender (system, user, assistant).
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new message.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Completion configuration.
#[derive(Debug, Clone, Default, PartialEq)]
// f32 temperature rules out Eq
#[allow(clippy::derive_partial_eq_without_eq)]
pub struct CompletionConfig {
    /// Model to request; the client default applies when `None`.
    pub model: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl CompletionConfig {
    /// Create a new completion config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    /// Input tokens (prompt).
    pub input_tokens: u32,
    /// Output tokens (completion).
    pub output_tokens: u32,
}

impl Usage {
    /// Create new usage info.
    #[must_use]
    pub const fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens used.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Completion response.
///
/// `content` is empty when the upstream returned no text for the first choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated text.
    pub content: String,
    /// Token usage.
    pub usage: Usage,
}

impl CompletionResponse {
    /// Create a new completion response.
    #[must_use]
    pub fn new(content: impl Into<String>, usage: Usage) -> Self {
        Self {
            content: content.into(),
            usage,
        }
    }
}
