//! Per-mode user instructions.

use crate::analysis::AnalysisMode;

/// Context used for devil's advocate when the caller supplies none.
pub const DEFAULT_CONTEXT: &str = "General debate";

/// Build the user instruction for `mode`.
///
/// `context` (the debate topic) is only used by
/// [`AnalysisMode::DevilsAdvocate`]. A summary receives the transcript
/// unquoted since it usually spans several speakers.
#[must_use]
pub fn user_prompt(mode: AnalysisMode, text: &str, context: Option<&str>) -> String {
    match mode {
        AnalysisMode::Analyze => format!(
            "Analyze this debate message for fact-checking and logical fallacies:\n\n\"{text}\""
        ),
        AnalysisMode::DevilsAdvocate => {
            let context = context
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CONTEXT);
            format!(
                "Generate a devil's advocate counter-argument for:\n\n\"{text}\"\n\nContext: {context}"
            )
        }
        AnalysisMode::Summarize => {
            format!("Summarize this debate and provide key arguments analysis:\n\n{text}")
        }
        AnalysisMode::General => format!("Analyze this message:\n\n\"{text}\""),
    }
}
