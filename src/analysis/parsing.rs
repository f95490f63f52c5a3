//! Tolerant parsing of model output.
//!
//! The model is asked for a JSON object but does not always comply. It may
//! wrap the object in a markdown fence or skip JSON entirely.
//! [`parse_analysis`] strips a fence when there is one and reports the
//! outcome as a [`ParseOutcome`] instead of an error.
//!
//! A parsed object is trusted once it is syntactically valid: nested
//! fields are not checked against [`AnalysisResult`] and unknown fields
//! are kept.

use serde_json::{Map, Value};

use super::types::{AnalysisOutput, AnalysisResult};

/// Outcome of a parse attempt on model output.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The text held a JSON object.
    Parsed(Map<String, Value>),
    /// Nothing usable was found; `raw` is the untouched model text.
    Failed {
        /// The original model output.
        raw: String,
    },
}

impl ParseOutcome {
    /// Convert into caller-facing output, degrading a failure.
    #[must_use]
    pub fn into_output(self) -> AnalysisOutput {
        match self {
            Self::Parsed(object) => AnalysisOutput::Parsed(object),
            Self::Failed { raw } => AnalysisOutput::Degraded(AnalysisResult::degraded(raw)),
        }
    }

    /// Whether parsing failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Parse model output into a JSON object.
///
/// The candidate text is the body of the first ```` ```json ```` fence,
/// else the body of the first plain ```` ``` ```` fence, else the whole
/// trimmed text. The candidate must be a JSON object; any other value,
/// or invalid JSON, is a failure.
///
/// # Examples
///
/// ```
/// use debate_analyst::analysis::{parse_analysis, ParseOutcome};
///
/// let fenced = "```json\n{\"fallacies\": [{\"name\": \"Red Herring\"}]}\n```";
/// let ParseOutcome::Parsed(object) = parse_analysis(fenced) else { panic!("should parse") };
/// assert_eq!(object["fallacies"][0]["name"], "Red Herring");
///
/// assert!(parse_analysis("I cannot analyze this.").is_degraded());
/// ```
#[must_use]
pub fn parse_analysis(content: &str) -> ParseOutcome {
    let trimmed = content.trim();
    let candidate = extract_from_code_block(trimmed, "```json")
        .or_else(|| extract_from_code_block(trimmed, "```"))
        .unwrap_or(trimmed);

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => ParseOutcome::Parsed(object),
        _ => ParseOutcome::Failed {
            raw: content.to_string(),
        },
    }
}

/// Extract the body of the first code block opened with `prefix`.
///
/// For a bare ```` ``` ```` fence a language tag on the opening line is
/// skipped.
fn extract_from_code_block<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let start_idx = text.find(prefix)?;
    let mut remaining = &text[start_idx + prefix.len()..];

    if prefix == "```" {
        if let Some(newline) = remaining.find('\n') {
            let tag = &remaining[..newline];
            if tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                remaining = &remaining[newline + 1..];
            }
        }
    }

    let end_idx = remaining.find("```")?;
    let body = remaining[..end_idx].trim();

    if body.is_empty() {
        return None;
    }

    Some(body)
}

/// Truncate text to at most `max_chars` characters for log previews.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
