//! AI gateway client.
//!
//! This module provides:
//! - An OpenAI-compatible chat-completions client ([`GatewayClient`])
//! - Request validation with size limits
//! - Mapping of upstream statuses onto [`crate::error::GatewayError`]
//!
//! # Example
//!
//! ```
//! use debate_analyst::gateway::{ClientConfig, GatewayClient};
//!
//! let config = ClientConfig::new()
//!     .with_base_url("http://localhost:9000/v1/")
//!     .with_timeout_ms(10_000);
//! assert_eq!(
//!     config.completions_url(),
//!     "http://localhost:9000/v1/chat/completions"
//! );
//! let _client = GatewayClient::new(config).expect("client builds");
//! ```

mod client;
mod config;
mod types;

pub use client::{GatewayClient, MAX_CONTENT_LENGTH, MAX_MESSAGES};
pub use config::ClientConfig;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, ChoiceMessage};
