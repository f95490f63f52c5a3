//! Prompt templates.
//!
//! - `system`: the fixed debate-analyst instruction and fallacy catalog
//! - `templates`: one user instruction per [`crate::analysis::AnalysisMode`]
//!
//! # Example
//!
//! ```
//! use debate_analyst::analysis::AnalysisMode;
//! use debate_analyst::prompts::{system_prompt, user_prompt};
//!
//! assert!(system_prompt().contains("Straw Man"));
//! let prompt = user_prompt(AnalysisMode::Summarize, "A: yes\nB: no", None);
//! assert!(prompt.starts_with("Summarize"));
//! ```

mod system;
mod templates;

pub use system::{system_prompt, FALLACY_CATALOG};
pub use templates::{user_prompt, DEFAULT_CONTEXT};
