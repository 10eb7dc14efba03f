//! Search results: the backend record shape and the card view model.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DESCRIPTION_MAX_CHARS, RERANK_SCORE_OFFSET, RERANK_SCORE_SPAN};

/// Free-form metadata attached to a retrieved chunk. Any field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawMetadata {
    #[serde(default)]
    pub api_name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub tags: Option<Vec<String>>,
}

/// One record of the `/search` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: RawMetadata,
    /// Cosine similarity from the vector index, already in [0, 1].
    #[serde(default)]
    pub score: Option<f64>,
    /// Cross-encoder score, unbounded.
    #[serde(default)]
    pub rerank_score: Option<f64>,
}

/// Response of `POST /search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawSearchResult>,
    #[serde(default)]
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Display-ready result card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub category: String,
    /// Match score in [0, 1].
    pub score: f64,
    pub auth: String,
    pub pricing: String,
    pub description: String,
    pub endpoints: Vec<String>,
    pub tags: Vec<String>,
    pub citations: u32,
}

impl SearchResult {
    /// Match score as a whole percentage, as shown on the card badge.
    #[must_use]
    pub fn match_percent(&self) -> u32 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// Maps a rerank score onto [0, 1] with `(score + 12) / 16`, clamped.
#[must_use]
pub fn normalize_rerank_score(rerank_score: f64) -> f64 {
    ((rerank_score + RERANK_SCORE_OFFSET) / RERANK_SCORE_SPAN).clamp(0.0, 1.0)
}

/// Keeps the first 300 characters, appending `...` when anything was cut.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + 3);
            out.push_str(text.get(..cut).unwrap_or(text));
            out.push_str("...");
            out
        },
        None => text.to_owned(),
    }
}

/// Converts a backend record into a card. Total: every field has a default.
#[must_use]
pub fn map_search_result(raw: &RawSearchResult) -> SearchResult {
    let meta = &raw.metadata;
    let method = non_empty(meta.method.as_deref());
    let path = non_empty(meta.path.as_deref());

    let (score, pricing) = match raw.rerank_score {
        Some(rerank) => (normalize_rerank_score(rerank), format!("rerank: {rerank:.2}")),
        None => {
            let similarity = raw.score.unwrap_or(0.0);
            (similarity, format!("sim: {similarity:.3}"))
        },
    };

    let auth = match method {
        Some(method) => format!("{method} {}", path.unwrap_or("")),
        None => "REST".to_owned(),
    };

    let endpoints = match path {
        Some(path) => vec![format!("{} {path}", method.unwrap_or(""))],
        None => Vec::new(),
    };

    SearchResult {
        name: non_empty(meta.api_name.as_deref()).unwrap_or("Unknown API").to_owned(),
        category: non_empty(meta.kind.as_deref()).unwrap_or("API").to_owned(),
        score,
        auth,
        pricing,
        description: truncate_description(&raw.text),
        endpoints,
        tags: meta.tags.clone().unwrap_or_default(),
        citations: 0,
    }
}

/// Maps every record of a response, preserving backend order.
#[must_use]
pub fn map_search_results(raw: &[RawSearchResult]) -> Vec<SearchResult> {
    raw.iter().map(map_search_result).collect()
}

/// Empty strings count as missing, matching how the backend omits fields.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tags arrive as a list of strings. Non-string entries are dropped, a bare
/// string becomes a one-element list, any other shape counts as missing.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        Some(serde_json::Value::String(single)) => Some(vec![single]),
        _ => None,
    })
}
