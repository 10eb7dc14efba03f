use api_universe_core::SearchResult;
use api_universe_core::demo::{
    self, DEMO_LATENCY_LABEL, DEMO_TOTAL_LABEL, PipelineStep, sample_results,
};
use api_universe_service::AppState;
use colored::Colorize;

use crate::primitives::{Tone, heading, indented, label, pill, pills, rule};

pub(crate) fn render(state: &AppState) -> Vec<String> {
    let demo_results;
    let (results, live): (&[SearchResult], bool) = match &state.results {
        Some(live) => (live.as_slice(), true),
        None => {
            demo_results = sample_results();
            (demo_results.as_slice(), false)
        },
    };
    let latency = state.latency_label().unwrap_or_else(|| DEMO_LATENCY_LABEL.to_owned());

    let mut out = vec![format!("  {}", "← New search (back)".dimmed())];
    if !state.query.is_empty() {
        out.push(format!("  ⌕ {}", state.query));
    }

    let mut summary = format!("{} results · {latency}", results.len());
    if live {
        summary.push_str(&format!(" · {}", "live from FAISS + cross-encoder".cyan()));
    }
    out.push(format!("  {}", summary.dimmed()));
    if live {
        let action = if state.loading { "Comparing..." } else { "Compare these results" };
        out.push(format!("  {} {}", "compare".magenta().bold(), action.magenta()));
    }
    out.push(String::new());

    for (index, result) in results.iter().enumerate() {
        out.extend(card(index, result, state.expanded_cards.contains(&index)));
        out.push(String::new());
    }

    if state.show_trace {
        let steps = match (live, state.latency_ms) {
            (true, Some(ms)) => demo::live_trace(ms, results),
            _ => demo::demo_trace(),
        };
        let total = match (live, state.latency_ms) {
            (true, Some(ms)) => format!("{ms}ms"),
            _ => DEMO_TOTAL_LABEL.to_owned(),
        };
        out.extend(trace_panel(&steps, live, &total, results.len()));
    }
    out
}

fn card(index: usize, result: &SearchResult, expanded: bool) -> Vec<String> {
    let badge = format!("{}% MATCH", result.match_percent());
    let mut out = vec![format!(
        "  {:>2}. {} {}  {}",
        index + 1,
        heading(&result.name),
        pill(&result.category, Tone::Cyan),
        badge.cyan().bold()
    )];
    out.push(format!("      ⛨ {}   ⚡ {}", result.auth, result.pricing).dimmed().to_string());
    out.extend(indented(&result.description, 6));
    out.push(format!("      {}", format!("🔗 {} citations", result.citations).blue()));
    if !result.tags.is_empty() {
        out.push(format!("      {}", pills(result.tags.iter().map(String::as_str), Tone::Purple)));
    }
    if expanded {
        out.push(format!("      {}", label("Endpoints")));
        for endpoint in &result.endpoints {
            out.push(format!("        {}", endpoint.green()));
        }
    }
    out
}

fn trace_panel(steps: &[PipelineStep], live: bool, total: &str, count: usize) -> Vec<String> {
    let status = if live { "Live" } else { "Demo" };
    let mut out = vec![
        rule(),
        format!("  {} {}  {}", "◆".cyan(), heading("Agent Trace"), pill(status, Tone::Green)),
    ];
    for step in steps {
        out.push(format!(
            "    {} {:<40} {}",
            "✓".green(),
            step.label,
            step.time.cyan()
        ));
        out.push(format!("      {}", step.detail.dimmed()));
    }
    out.push(format!("  {}", format!("Total: {total}   {count} results · $0.0002").dimmed()));
    out
}
