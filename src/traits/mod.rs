//! Trait definitions for mockable dependencies.
//!
//! [`CompletionClient`] is the seam between the analyzer and the upstream
//! model. Production code uses [`crate::gateway::GatewayClient`]; unit tests
//! use the generated `MockCompletionClient`.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`,
//! which generates a mock implementation for in-crate tests.

mod types;

pub use types::{CompletionConfig, CompletionResponse, Message, Usage};

use async_trait::async_trait;

use crate::config::ApiKey;
use crate::error::GatewayError;

/// Chat-completion client trait for mocking.
///
/// The credential is passed per call so the caller, not the client, owns
/// the decision of whether a key is configured at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single completion request. Implementations must not retry.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gateway credential
    /// * `messages` - The conversation messages, system first
    /// * `config` - Completion configuration options
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure or a non-success status.
    async fn complete(
        &self,
        api_key: &ApiKey,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, GatewayError>;
}

#[async_trait]
impl<T: CompletionClient + ?Sized> CompletionClient for std::sync::Arc<T> {
    async fn complete(
        &self,
        api_key: &ApiKey,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, GatewayError> {
        (**self).complete(api_key, messages, config).await
    }
}
