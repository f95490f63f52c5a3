//! Chat-completions wire types.
//!
//! The gateway speaks the OpenAI-compatible `/chat/completions` dialect:
//! a flat `messages` array (system prompt included) in, `choices` out.

#![allow(clippy::derive_partial_eq_without_eq)]

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    /// Model identifier (e.g., "google/gemini-2.5-flash").
    pub model: String,
    /// Conversation messages, system first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Create a request with required fields.
    #[must_use]
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
        }
    }

    /// Set temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// "system", "user" or "assistant".
    pub role: String,
    /// Plain-text content.
    pub content: String,
}

/// Response body from `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatResponse {
    /// Response ID, when the gateway provides one.
    #[serde(default)]
    pub id: Option<String>,
    /// Generated choices; the first one is used.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token usage, when reported.
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

impl ChatResponse {
    /// Text of the first choice, if any.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

/// One generated choice.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatChoice {
    /// The generated message.
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message inside a choice. `content` may be null for tool calls.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChoiceMessage {
    /// Role, normally "assistant".
    #[serde(default)]
    pub role: Option<String>,
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage as reported by the gateway.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct ChatUsage {
    /// Prompt tokens.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Completion tokens.
    #[serde(default)]
    pub completion_tokens: u32,
}
