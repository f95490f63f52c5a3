//! Request bodies accepted by the HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisMode, AnalysisRequest};

/// Body of `POST /analyze-debate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeDebateBody {
    /// Debate message or transcript.
    pub message: String,
    /// Mode: `analyze`, `devils_advocate` or `summarize`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Debate topic, used by `devils_advocate`.
    #[serde(rename = "debateContext", default)]
    pub debate_context: Option<String>,
}

impl AnalyzeDebateBody {
    /// Convert into an analysis request. Unknown modes fall back to general.
    #[must_use]
    pub fn into_request(self) -> AnalysisRequest {
        let mode = AnalysisMode::from_wire(self.kind.as_deref());
        let request = AnalysisRequest::new(self.message, mode);
        match self.debate_context {
            Some(context) => request.with_context(context),
            None => request,
        }
    }
}
