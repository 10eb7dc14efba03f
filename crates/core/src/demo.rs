//! Fixed sample data shown before any live response arrives, and the canned
//! observability figures.

use crate::SearchResult;

/// Latency label shown next to the demo results.
pub const DEMO_LATENCY_LABEL: &str = "1.92s";

/// Trace footer total for the demo results.
pub const DEMO_TOTAL_LABEL: &str = "1,924ms";

/// Size of the index the backend advertises.
pub const INDEXED_APIS_LABEL: &str = "2,529 APIs indexed";

/// Loading banner text.
pub const LOADING_LABEL: &str = "Searching 125,655 vectors...";

/// Query suggestions offered on the search view.
pub const SUGGESTIONS: [&str; 4] = [
    "Send SMS messages internationally",
    "Compare payment APIs with recurring billing",
    "HIPAA-compliant file storage with encryption",
    "Real-time currency conversion with batch support",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[must_use]
pub fn sample_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            name: "Twilio Messaging API".to_owned(),
            category: "Communications".to_owned(),
            score: 0.96,
            auth: "API Key".to_owned(),
            pricing: "Pay-per-use · $0.0079/SMS".to_owned(),
            description: "Programmatically send and receive SMS, MMS, and WhatsApp messages \
                          across 180+ countries. Supports delivery callbacks, message \
                          scheduling, and number formatting."
                .to_owned(),
            endpoints: owned(&[
                "POST /Messages",
                "GET /Messages/{sid}",
                "POST /Messages/{sid}/Feedback",
            ]),
            tags: owned(&["SMS", "MMS", "WhatsApp", "International"]),
            citations: 3,
        },
        SearchResult {
            name: "Vonage SMS API".to_owned(),
            category: "Communications".to_owned(),
            score: 0.91,
            auth: "API Key + Secret".to_owned(),
            pricing: "Pay-per-use · $0.0068/SMS".to_owned(),
            description: "Send SMS messages globally with Unicode support, concatenation \
                          handling, and delivery receipts. Direct carrier connections in 200+ \
                          countries."
                .to_owned(),
            endpoints: owned(&["POST /sms/json", "GET /search/messages", "POST /verify/json"]),
            tags: owned(&["SMS", "Unicode", "Carrier-direct"]),
            citations: 2,
        },
        SearchResult {
            name: "MessageBird API".to_owned(),
            category: "Communications".to_owned(),
            score: 0.87,
            auth: "Bearer Token".to_owned(),
            pricing: "Pay-per-use · $0.006/SMS".to_owned(),
            description: "Omnichannel messaging platform supporting SMS, voice, and chat apps. \
                          REST API with real-time webhooks for delivery status and inbound \
                          messages."
                .to_owned(),
            endpoints: owned(&["POST /messages", "GET /messages/{id}", "POST /contacts"]),
            tags: owned(&["SMS", "Omnichannel", "Webhooks"]),
            citations: 2,
        },
    ]
}

/// A step of the retrieval pipeline as displayed in a trace panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    pub label: String,
    pub time: String,
    pub detail: String,
}

#[must_use]
pub fn demo_trace() -> Vec<PipelineStep> {
    [
        ("Query Embedding", "42ms", "text-embedding-3-large → 3072 dims"),
        ("Vector Retrieval", "118ms", "pgvector · top 25 chunks · cosine similarity"),
        ("Cross-Encoder Rerank", "205ms", "25 → 8 chunks · ms-marco-MiniLM-L-12"),
        ("LLM Generation", "1,247ms", "Azure OpenAI · GPT-4 · 847 tokens"),
        ("Grounding Check", "312ms", "Score: 94% · 17/18 claims verified"),
    ]
    .into_iter()
    .map(|(label, time, detail)| PipelineStep {
        label: label.to_owned(),
        time: time.to_owned(),
        detail: detail.to_owned(),
    })
    .collect()
}

/// Approximates the per-stage timings of a live search from its total
/// latency. The backend reports only the total.
#[must_use]
pub fn live_trace(latency_ms: u64, results: &[SearchResult]) -> Vec<PipelineStep> {
    let share = |fraction: f64| format!("{}ms", (latency_ms as f64 * fraction).round() as u64);
    let top_score = results
        .first()
        .map_or_else(|| "N/A".to_owned(), |r| format!("{}%", r.match_percent()));
    vec![
        PipelineStep {
            label: "Query Embedding".to_owned(),
            time: share(0.03),
            detail: "text-embedding-3-large → 3072 dims".to_owned(),
        },
        PipelineStep {
            label: "FAISS Retrieval".to_owned(),
            time: share(0.05),
            detail: "125,655 vectors · top 25 · cosine similarity".to_owned(),
        },
        PipelineStep {
            label: "Cross-Encoder Rerank".to_owned(),
            time: share(0.15),
            detail: format!("25 → {} chunks · ms-marco-MiniLM-L-6-v2", results.len()),
        },
        PipelineStep {
            label: "Score & Rank".to_owned(),
            time: share(0.02),
            detail: format!("Top score: {top_score}"),
        },
    ]
}

/// A cell of the static comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionValue {
    Flag(bool),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub name: &'static str,
    pub values: Vec<CriterionValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    pub query: &'static str,
    pub apis: Vec<&'static str>,
    pub criteria: Vec<Criterion>,
    pub recommendation: &'static str,
}

#[must_use]
pub fn payment_comparison() -> ComparisonTable {
    use CriterionValue::{Flag, Text};

    let all = || vec![Flag(true); 4];
    ComparisonTable {
        query: "Compare payment APIs with recurring billing, sandbox, and under 3% fees",
        apis: vec!["Stripe", "Braintree", "Adyen", "Square"],
        criteria: vec![
            Criterion { name: "Recurring Billing", values: all() },
            Criterion { name: "Sandbox Environment", values: all() },
            Criterion {
                name: "Transaction Fee",
                values: vec![
                    Text("2.9% + 30¢"),
                    Text("2.59% + 49¢"),
                    Text("Interchange++"),
                    Text("2.6% + 10¢"),
                ],
            },
            Criterion { name: "Under 3%", values: all() },
            Criterion {
                name: "Multi-Currency",
                values: vec![Flag(true), Flag(true), Flag(true), Flag(false)],
            },
            Criterion { name: "Webhook Support", values: all() },
            Criterion { name: "PCI DSS Level 1", values: all() },
        ],
        recommendation: "Stripe offers the strongest developer experience with the most \
                         comprehensive documentation. For high-volume processing (>$500K/mo), \
                         Adyen's Interchange++ model typically results in lower effective rates.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

impl MetricCard {
    /// A falling value is bad unless the metric measures something we want
    /// to go down.
    #[must_use]
    pub fn delta_is_regression(&self) -> bool {
        self.delta.starts_with('-')
            && !self.label.contains("Hallucination")
            && !self.label.contains("Latency")
    }
}

#[must_use]
pub fn metric_cards() -> Vec<MetricCard> {
    vec![
        MetricCard { label: "Precision@5", value: "89.2%", delta: "+2.1%" },
        MetricCard { label: "Grounding Score", value: "91.4%", delta: "+0.8%" },
        MetricCard { label: "Hallucination Rate", value: "3.2%", delta: "-0.5%" },
        MetricCard { label: "P95 Latency", value: "1.82s", delta: "-120ms" },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: &'static str,
    pub data: Vec<f64>,
    pub caption: &'static str,
    pub verdict: &'static str,
}

#[must_use]
pub fn trend_charts() -> Vec<TrendChart> {
    vec![
        TrendChart {
            title: "Precision@5 Trend",
            data: vec![85.0, 86.5, 87.0, 86.8, 88.0, 87.5, 88.5, 89.0, 89.2],
            caption: "Peak: 89.2%",
            verdict: "↑ Steady climb",
        },
        TrendChart {
            title: "Hallucination Rate",
            data: vec![5.1, 4.8, 4.2, 4.0, 3.8, 3.5, 3.4, 3.3, 3.2],
            caption: "Current: 3.2%",
            verdict: "↓ Improving",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRoute {
    pub provider: &'static str,
    pub pct: u8,
    pub latency: &'static str,
    pub healthy: bool,
}

#[must_use]
pub fn cloud_routing() -> Vec<ProviderRoute> {
    vec![
        ProviderRoute { provider: "Azure OpenAI", pct: 70, latency: "1.2s", healthy: true },
        ProviderRoute { provider: "AWS Bedrock", pct: 25, latency: "1.8s", healthy: true },
        ProviderRoute { provider: "OpenAI Direct", pct: 5, latency: "2.1s", healthy: false },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub commit: &'static str,
    pub message: &'static str,
    pub precision_at_5: &'static str,
    pub baseline: bool,
}

#[must_use]
pub fn recent_evaluations() -> Vec<Evaluation> {
    vec![
        Evaluation {
            commit: "a3f82d1",
            message: "Adaptive chunking v2",
            precision_at_5: "89.2%",
            baseline: false,
        },
        Evaluation {
            commit: "7e1bc44",
            message: "Add cross-encoder rerank",
            precision_at_5: "87.1%",
            baseline: false,
        },
        Evaluation {
            commit: "d9f3a02",
            message: "Tune grounding threshold",
            precision_at_5: "86.5%",
            baseline: false,
        },
        Evaluation {
            commit: "1b4e7f9",
            message: "Naive chunking baseline",
            precision_at_5: "62.3%",
            baseline: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_cards_are_complete() {
        let results = sample_results();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Twilio Messaging API", "Vonage SMS API", "MessageBird API"]);
        assert!(results[0].description.contains("180+ countries. Supports delivery callbacks"));
        assert!(results.iter().all(|r| r.endpoints.len() == 3 && !r.tags.is_empty()));
        assert_eq!(results.iter().map(|r| r.citations).sum::<u32>(), 7);
    }

    #[test]
    fn live_trace_splits_total_latency() {
        let results = sample_results();
        let trace = live_trace(2000, &results);
        let times: Vec<_> = trace.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, ["60ms", "100ms", "300ms", "40ms"]);
        assert_eq!(trace[2].detail, "25 → 3 chunks · ms-marco-MiniLM-L-6-v2");
        assert_eq!(trace[3].detail, "Top score: 96%");
    }

    #[test]
    fn live_trace_without_results_reports_na() {
        let trace = live_trace(0, &[]);
        assert_eq!(trace[3].detail, "Top score: N/A");
    }

    #[test]
    fn regression_deltas_respect_metric_direction() {
        let cards = metric_cards();
        assert!(cards.iter().all(|c| !c.delta_is_regression()));
        let falling_precision = MetricCard { label: "Precision@5", value: "80%", delta: "-3%" };
        assert!(falling_precision.delta_is_regression());
    }

    #[test]
    fn comparison_rows_match_api_count() {
        let table = payment_comparison();
        assert!(table.criteria.iter().all(|c| c.values.len() == table.apis.len()));
    }
}
