use api_universe_core::demo::{
    MetricCard, cloud_routing, metric_cards, recent_evaluations, trend_charts,
};
use colored::Colorize;

use crate::primitives::{Tone, check_mark, heading, label, pill, progress_bar, rule, sparkline};

const ROUTING_BAR_WIDTH: usize = 30;

pub(crate) fn render() -> Vec<String> {
    let mut out = vec![
        String::new(),
        format!("  {}", heading("System Observability")),
        format!("  {}", "Live metrics from production · Last updated 12s ago".dimmed()),
        String::new(),
    ];

    for card in metric_cards() {
        out.push(metric_line(&card));
    }
    out.push(String::new());

    for chart in trend_charts() {
        out.push(format!("  {}", label(chart.title)));
        out.push(format!("    {}", sparkline(&chart.data).cyan()));
        out.push(format!("    {}   {}", chart.caption.dimmed(), chart.verdict.green()));
    }

    out.push(rule());
    out.push(format!("  {}", heading("Multi-Cloud Routing")));
    for route in cloud_routing() {
        out.push(format!(
            "    {} {:<16} {} avg",
            check_mark(route.healthy),
            route.provider,
            route.latency
        ));
        let tone = if route.healthy { Tone::Blue } else { Tone::Red };
        out.push(format!(
            "      {} {}",
            tone.paint(&progress_bar(f64::from(route.pct) / 100.0, ROUTING_BAR_WIDTH)),
            format!("{}% of traffic", route.pct).dimmed()
        ));
    }

    out.push(rule());
    out.push(format!("  {}", heading("Recent Evaluations")));
    for eval in recent_evaluations() {
        let score = if eval.baseline {
            pill(eval.precision_at_5, Tone::Muted)
        } else {
            pill(eval.precision_at_5, Tone::Cyan)
        };
        out.push(format!("    {} {:<28} P@5 {score}", eval.commit.dimmed(), eval.message));
    }
    out
}

fn metric_line(card: &MetricCard) -> String {
    let delta = format!("{} vs last week", card.delta);
    let delta = if card.delta_is_regression() { delta.red() } else { delta.green() };
    format!("  {:<20} {:>8}   {delta}", card.label, card.value.bold().to_string())
}
