//! Shared display pieces: pills, rules, bars, sparklines, wrapped text.

use api_universe_core::{ClaimStatus, GroundingLevel};
use colored::{ColoredString, Colorize};

/// Target line width of every view.
pub const WIDTH: usize = 78;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Accent colours of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Cyan,
    Purple,
    Amber,
    Red,
    Green,
    Muted,
}

impl Tone {
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Blue => text.blue(),
            Self::Cyan => text.cyan(),
            Self::Purple => text.magenta(),
            Self::Amber => text.yellow(),
            Self::Red => text.red(),
            Self::Green => text.green(),
            Self::Muted => text.dimmed(),
        }
    }
}

impl From<GroundingLevel> for Tone {
    fn from(level: GroundingLevel) -> Self {
        match level {
            GroundingLevel::High => Self::Green,
            GroundingLevel::Medium => Self::Amber,
            GroundingLevel::Low => Self::Red,
        }
    }
}

#[must_use]
pub fn pill(text: &str, tone: Tone) -> String {
    tone.paint(&format!("[{text}]")).to_string()
}

#[must_use]
pub fn pills<'a>(items: impl IntoIterator<Item = &'a str>, tone: Tone) -> String {
    items.into_iter().map(|t| pill(t, tone)).collect::<Vec<_>>().join(" ")
}

#[must_use]
pub fn rule() -> String {
    "─".repeat(WIDTH).dimmed().to_string()
}

#[must_use]
pub fn heading(text: &str) -> String {
    text.bold().to_string()
}

/// Small-caps style section label.
#[must_use]
pub fn label(text: &str) -> String {
    text.to_uppercase().dimmed().to_string()
}

#[must_use]
pub fn check_mark(ok: bool) -> ColoredString {
    if ok { "✓".green() } else { "✗".red() }
}

#[must_use]
pub fn claim_icon(status: ClaimStatus) -> ColoredString {
    match status {
        ClaimStatus::Supported => "✓".green(),
        ClaimStatus::Unsupported => "✗".red(),
        ClaimStatus::Unverifiable => "⚠".yellow(),
    }
}

/// Horizontal bar filled to `fraction` (clamped to [0, 1]).
#[must_use]
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width.saturating_sub(filled)))
}

/// One character per point, scaled between the series min and max. A flat
/// series sits on the baseline.
#[must_use]
pub fn sparkline(data: &[f64]) -> String {
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| (lo.min(d), hi.max(d)));
    let range = if max - min > 0.0 { max - min } else { 1.0 };
    let top = (SPARK_LEVELS.len() - 1) as f64;
    data.iter()
        .map(|&d| {
            let level = (((d - min) / range) * top).round() as usize;
            SPARK_LEVELS.get(level).copied().unwrap_or('█')
        })
        .collect()
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps and prefixes every line with `indent` spaces.
#[must_use]
pub fn indented(text: &str, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    wrap(text, WIDTH.saturating_sub(indent)).into_iter().map(|l| format!("{pad}{l}")).collect()
}
