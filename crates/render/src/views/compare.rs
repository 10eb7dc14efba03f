use api_universe_core::demo::{ComparisonTable, CriterionValue, payment_comparison};
use api_universe_core::{AgentResult, Grounding};
use api_universe_service::AppState;
use colored::Colorize;

use crate::primitives::{
    Tone, check_mark, claim_icon, heading, indented, label, pill, progress_bar, rule,
};

const GROUNDING_BAR_WIDTH: usize = 40;
const CRITERION_COLUMN: usize = 22;
const API_COLUMN: usize = 14;

pub(crate) fn render(state: &AppState) -> Vec<String> {
    if state.loading {
        return agent_reasoning();
    }
    match &state.agent_result {
        Some(result) => agent_answer(result),
        None => static_comparison(&payment_comparison()),
    }
}

fn agent_reasoning() -> Vec<String> {
    vec![
        String::new(),
        format!("  {}", "Agent reasoning...".magenta().bold()),
        format!(
            "  {}",
            "Decomposing query → Searching sub-queries → Cross-encoder reranking → \
             Generating answer → Grounding check"
                .dimmed()
        ),
    ]
}

fn agent_answer(result: &AgentResult) -> Vec<String> {
    let mut badges = vec![pill(result.query_type_label(), Tone::Purple)];
    if result.self_corrected() {
        badges.push(pill("Self-corrected", Tone::Amber));
    }
    badges.push(pill(&result.latency_label(), Tone::Cyan));

    let mut out =
        vec![format!("  {}  {}", heading("Agent Answer"), badges.join(" ")), String::new()];
    out.extend(result.answer.lines().map(|line| format!("  {line}")));
    out.push(String::new());
    out.extend(grounding_panel(&result.grounding));
    out.push(String::new());

    out.push(rule());
    out.push(format!(
        "  {} {}  {}",
        "◆".magenta(),
        heading("Agent Trace"),
        pill("Live", Tone::Purple)
    ));
    for step in &result.trace {
        out.push(format!("    {} {}", "✓".magenta(), step.step));
        let detail = step.detail();
        if !detail.is_empty() {
            out.push(format!("      {}", detail.dimmed()));
        }
    }
    out.push(format!(
        "  {}",
        format!("Total: {}   {}", result.latency_label(), result.retry_label()).dimmed()
    ));
    out
}

fn grounding_panel(grounding: &Grounding) -> Vec<String> {
    let tone = Tone::from(grounding.level());
    let mut out = vec![
        format!(
            "  {}  {}",
            label("Grounding"),
            tone.paint(&format!("{}%", grounding.percent())).bold()
        ),
        format!("  {}", tone.paint(&progress_bar(grounding.score, GROUNDING_BAR_WIDTH))),
        format!(
            "  {}",
            format!(
                "{}/{} claims verified against source documents",
                grounding.supported, grounding.total
            )
            .dimmed()
        ),
    ];
    for claim in &grounding.claims {
        let mut line = format!("    {} {}", claim_icon(claim.status), claim.claim);
        if let Some(source) = claim.source.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" {}", format!("({source})").dimmed()));
        }
        out.push(line);
    }
    out
}

fn static_comparison(table: &ComparisonTable) -> Vec<String> {
    let mut out = vec![
        String::new(),
        format!("  {}", heading("API Comparison")),
        format!("  {}", format!("\"{}\"", table.query).dimmed()),
        format!(
            "  {} · 3 sub-queries · {} APIs compared · 2.4s",
            "Multi-step agent".magenta(),
            table.apis.len()
        ),
        String::new(),
    ];

    let mut header = format!("  {}", format!("{:<CRITERION_COLUMN$}", "CRITERIA").dimmed());
    for api in &table.apis {
        header.push_str(&format!("{:<API_COLUMN$}", api).bold().to_string());
    }
    out.push(header);
    out.push(rule());

    for criterion in &table.criteria {
        let mut row = format!("  {:<CRITERION_COLUMN$}", criterion.name);
        for value in &criterion.values {
            let cell = match value {
                CriterionValue::Flag(ok) => format!("{:<API_COLUMN$}", check_mark(*ok)),
                CriterionValue::Text(text) => format!("{text:<API_COLUMN$}"),
            };
            row.push_str(&cell);
        }
        out.push(row.trim_end().to_owned());
    }

    out.push(String::new());
    out.push(format!("  {}", "↗ Recommendation:".green().bold()));
    out.extend(indented(table.recommendation, 4));
    out
}
