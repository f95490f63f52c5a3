//! Analysis request and result types.
//!
//! [`AnalysisResult`] is the documented response shape and the body of the
//! degraded fallback. A successfully parsed upstream object is never forced
//! through it: [`AnalysisOutput::Parsed`] carries the object unchanged.

#![allow(clippy::derive_partial_eq_without_eq)]

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Request
// ============================================================================

/// Requested analysis mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisMode {
    /// Fact-check and fallacy findings.
    Analyze,
    /// Counter-argument, grounded in the debate topic.
    DevilsAdvocate,
    /// Neutral summary and argument breakdown.
    Summarize,
    /// Fallback for unknown or missing modes.
    General,
}

impl AnalysisMode {
    /// Map a wire value onto a mode. Unknown or missing values never fail.
    ///
    /// ```
    /// use debate_analyst::analysis::AnalysisMode;
    ///
    /// assert_eq!(AnalysisMode::from_wire(Some("summarize")), AnalysisMode::Summarize);
    /// assert_eq!(AnalysisMode::from_wire(Some("roast")), AnalysisMode::General);
    /// assert_eq!(AnalysisMode::from_wire(None), AnalysisMode::General);
    /// ```
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("analyze") => Self::Analyze,
            Some("devils_advocate") => Self::DevilsAdvocate,
            Some("summarize") => Self::Summarize,
            _ => Self::General,
        }
    }

    /// Wire name, `general` for the fallback.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::DevilsAdvocate => "devils_advocate",
            Self::Summarize => "summarize",
            Self::General => "general",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Debate message or transcript.
    pub text: String,
    /// Requested mode.
    pub mode: AnalysisMode,
    /// Debate topic, if any.
    pub context: Option<String>,
}

impl AnalysisRequest {
    /// Create a request without context.
    #[must_use]
    pub fn new(text: impl Into<String>, mode: AnalysisMode) -> Self {
        Self {
            text: text.into(),
            mode,
            context: None,
        }
    }

    /// Attach a debate topic. Blank topics are dropped.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context: String = context.into();
        self.context = Some(context).filter(|c| !c.trim().is_empty());
        self
    }
}

// ============================================================================
// Result
// ============================================================================

/// Fact-check verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FactCheckStatus {
    /// Supported by reliable evidence.
    Verified,
    /// Cannot be confirmed either way.
    Unverified,
    /// Contradicted by evidence.
    Incorrect,
}

/// One checked claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactCheckFinding {
    /// The claim as stated.
    pub claim: String,
    /// Verdict.
    pub status: FactCheckStatus,
    /// Reasoning behind the verdict.
    pub explanation: String,
    /// Model confidence, nominally 0.0-1.0.
    pub confidence: f64,
}

/// One named fallacy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FallacyFinding {
    /// Fallacy name, e.g. "Straw Man".
    pub name: String,
    /// Where and how it occurs.
    pub explanation: String,
}

/// Overall argument strength.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentStrength {
    /// Poorly supported.
    Weak,
    /// Partially supported.
    #[default]
    Moderate,
    /// Well supported.
    Strong,
}

/// Strength rating plus supporting notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentAssessment {
    /// Strength rating.
    #[serde(default)]
    pub strength: ArgumentStrength,
    /// Main claims and evidence, in order.
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Improvement suggestions, in order.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Normalized analysis output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Fact-check findings.
    #[serde(default)]
    pub fact_checks: Vec<FactCheckFinding>,
    /// Fallacy findings.
    #[serde(default)]
    pub fallacies: Vec<FallacyFinding>,
    /// Argument assessment.
    #[serde(default)]
    pub argument_analysis: ArgumentAssessment,
    /// Counter-argument (devil's advocate mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_argument: Option<String>,
    /// Neutral summary (summarize mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AnalysisResult {
    /// Result used when the model's output cannot be parsed.
    ///
    /// The raw text is kept as the sole suggestion so nothing the model said
    /// is lost.
    ///
    /// ```
    /// use debate_analyst::analysis::{AnalysisResult, ArgumentStrength};
    ///
    /// let result = AnalysisResult::degraded("I cannot analyze this.");
    /// assert!(result.fact_checks.is_empty());
    /// assert_eq!(result.argument_analysis.strength, ArgumentStrength::Moderate);
    /// assert_eq!(result.argument_analysis.suggestions, vec!["I cannot analyze this."]);
    /// ```
    #[must_use]
    pub fn degraded(raw: impl Into<String>) -> Self {
        Self {
            argument_analysis: ArgumentAssessment {
                strength: ArgumentStrength::Moderate,
                key_points: Vec::new(),
                suggestions: vec![raw.into()],
            },
            ..Self::default()
        }
    }
}

/// What an analysis hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutput {
    /// The upstream JSON object, including fields this crate does not model.
    Parsed(Map<String, Value>),
    /// Fallback built from model text that held no JSON object.
    Degraded(AnalysisResult),
}

impl AnalysisOutput {
    /// Whether this is the degraded fallback.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }

    /// Entries in `fact_checks` plus `fallacies`. Non-array values count as zero.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        match self {
            Self::Parsed(object) => ["fact_checks", "fallacies"]
                .iter()
                .filter_map(|key| object.get(*key).and_then(Value::as_array))
                .map(Vec::len)
                .sum(),
            Self::Degraded(result) => result.fact_checks.len() + result.fallacies.len(),
        }
    }
}
