use api_universe_core::demo::SUGGESTIONS;
use api_universe_service::AppState;
use colored::Colorize;

use crate::primitives::{indented, label};

pub(crate) fn render(state: &AppState) -> Vec<String> {
    let mut out = vec![
        String::new(),
        format!("  {}", "API Universe".bold().cyan()),
    ];
    out.extend(indented(
        "Discover, compare, and understand APIs using natural language. \
         Powered by semantic search and RAG.",
        2,
    ));
    out.push(String::new());

    let prompt = if state.query.is_empty() {
        "Describe what you're looking for...".dimmed().to_string()
    } else {
        state.query.clone()
    };
    out.push(format!("  ⌕ {prompt}"));
    out.push(format!(
        "    {} <query>   {} <query>",
        "search".blue().bold(),
        "agent".magenta().bold()
    ));
    out.push(String::new());

    out.push(format!("  {}", label("Try")));
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        out.push(format!("    {} {suggestion}", format!("[{}]", i + 1).dimmed()));
    }
    out.push(format!("    {}", "suggest <n> runs a suggestion".dimmed()));
    out
}
