//! Agent answers: grounding verification and the multi-step reasoning trace.

use serde::{Deserialize, Serialize};

use crate::search::null_as_default;

/// Verification status of one answer claim.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    Supported,
    Unsupported,
    /// Also used for a missing status and any status the backend invents later.
    #[default]
    #[serde(other)]
    Unverifiable,
}

/// A single claim extracted from the answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claim {
    #[serde(default, deserialize_with = "null_as_default")]
    pub claim: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Grounding summary: how much of the answer is backed by sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Grounding {
    /// Fraction of supported claims, in [0, 1].
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supported: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub claims: Vec<Claim>,
}

/// Grounding band used to colour the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingLevel {
    High,
    Medium,
    Low,
}

impl Grounding {
    #[must_use]
    pub fn level(&self) -> GroundingLevel {
        if self.score > 0.7 {
            GroundingLevel::High
        } else if self.score > 0.4 {
            GroundingLevel::Medium
        } else {
            GroundingLevel::Low
        }
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// `result` of a trace step: a label, or the list of sub-queries produced by
/// decomposition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StepResult {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

/// One node of the agent trace. Fields present depend on the step kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraceStep {
    #[serde(default, deserialize_with = "null_as_default")]
    pub step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<StepResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_queries: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined_queries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
}

impl TraceStep {
    /// One-line summary of whatever this step reported.
    #[must_use]
    pub fn detail(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match &self.result {
            Some(StepResult::Text(text)) => parts.push(text.clone()),
            Some(StepResult::List(items)) => parts.push(items.join(", ")),
            Some(StepResult::Other(_)) | None => {},
        }
        if let Some(score) = self.grounding_score {
            parts.push(format!("Score: {:.0}%", score * 100.0));
        }
        if let Some(total) = self.total_results {
            parts.push(format!("{total} results"));
        }
        if let Some(tokens) = self.tokens {
            parts.push(format!("{tokens} tokens"));
        }
        if let Some(reason) = &self.reason {
            parts.push(reason.clone());
        }
        if let Some(refined) = &self.refined_queries {
            parts.push(refined.join(", "));
        }
        parts.join(" · ")
    }
}

/// Source document the agent cited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Response of `POST /agent`, stored as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub retries: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latency_ms: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grounding: Grounding,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trace: Vec<TraceStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sources: Vec<AgentSource>,
}

impl AgentResult {
    /// Query type pill text; the backend leaves it empty for unclassified queries.
    #[must_use]
    pub fn query_type_label(&self) -> &str {
        if self.query_type.is_empty() { "agent" } else { &self.query_type }
    }

    #[must_use]
    pub const fn self_corrected(&self) -> bool {
        self.retries > 0
    }

    /// Latency in seconds with one decimal, e.g. `"4.2s"`.
    #[must_use]
    pub fn latency_label(&self) -> String {
        format!("{:.1}s", self.latency_ms as f64 / 1000.0)
    }

    /// Trace footer: how many refinement passes the agent needed.
    #[must_use]
    pub fn retry_label(&self) -> String {
        if self.retries > 0 {
            format!("retried {}x", self.retries)
        } else {
            "first pass".to_owned()
        }
    }
}
