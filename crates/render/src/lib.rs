//! Terminal rendering of the discovery client.
//!
//! Rendering is a pure function of [`AppState`]: the same state always
//! produces the same text. Colour follows `colored`'s global switch, so
//! callers (and tests) can turn it off with `colored::control::set_override`.

pub mod primitives;
mod views;

use api_universe_core::View;
use api_universe_core::demo::{INDEXED_APIS_LABEL, LOADING_LABEL};
use api_universe_service::AppState;
use colored::Colorize;

use crate::primitives::{Tone, pill, rule};

/// Full frame: nav bar, banners, then the active view.
#[must_use]
pub fn render_app(state: &AppState) -> String {
    let mut lines = vec![nav_bar(state.view), rule()];
    if !state.error.is_empty() {
        lines.push(format!("  {} {}", "✗".red().bold(), state.error.red()));
    }
    if state.loading {
        lines.push(format!("  {}", LOADING_LABEL.blue()));
    }
    lines.extend(views::body(state));
    lines.push(String::new());
    lines.join("\n")
}

/// Only the body of the active view, without nav bar or banners.
#[must_use]
pub fn render_view(state: &AppState) -> String {
    views::body(state).join("\n")
}

fn nav_bar(active: View) -> String {
    let tabs: Vec<String> = View::ALL_VARIANTS
        .iter()
        .map(|view| {
            if *view == active {
                format!("[{}]", view.label()).bold().cyan().to_string()
            } else {
                view.label().dimmed().to_string()
            }
        })
        .collect();
    format!(
        "{}  {}  {}",
        "◆ API Universe".bold(),
        tabs.join("  "),
        pill(INDEXED_APIS_LABEL, Tone::Green)
    )
}
