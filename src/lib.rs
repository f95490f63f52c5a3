//! Debate Analyst
//!
//! A stateless HTTP proxy that sends debate messages to an
//! OpenAI-compatible LLM gateway and returns structured analysis:
//! fact-checks, named fallacies, an argument-strength rating, and
//! optionally a counter-argument or summary.
//!
//! # Features
//!
//! - Four modes: `analyze`, `devils_advocate`, `summarize`, and a general fallback
//! - Tolerant parsing of model output, degrading instead of failing
//! - Distinct client-facing errors for rate limiting and exhausted credits
//! - Exactly one upstream call per request, no hidden retries
//!
//! # Quick Start
//!
//! ```bash
//! AI_GATEWAY_API_KEY=xxx ./debate-analyst
//! curl -X POST localhost:8080/analyze-debate \
//!   -d '{"message": "Solar power is always cheaper than coal.", "type": "analyze"}'
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────┐  POST /analyze-debate  ┌──────────────────┐
//! │ Client │───────────────────────▶│  server (axum)   │
//! │        │◀───────────────────────│  DebateAnalyzer  │──────▶ LLM gateway
//! └────────┘       JSON result      └──────────────────┘  /chat/completions
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prompts;
pub mod server;
pub mod traits;

#[cfg(test)]
mod test_utils;
