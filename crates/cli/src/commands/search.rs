use anyhow::Result;

use super::{connect, print_outcome};
use crate::settings::Settings;

pub(crate) async fn run_search(settings: &Settings, query: &str, json: bool) -> Result<()> {
    let mut controller = connect(settings).await?;
    controller.search(query).await;
    print_outcome(&controller, json)
}

pub(crate) async fn run_agent(settings: &Settings, query: &str, json: bool) -> Result<()> {
    let mut controller = connect(settings).await?;
    controller.agent(query).await;
    print_outcome(&controller, json)
}

/// Search first; the comparison only runs when the search produced results.
pub(crate) async fn run_compare(settings: &Settings, query: &str, json: bool) -> Result<()> {
    let mut controller = connect(settings).await?;
    if controller.search(query).await && controller.state().has_live_results() {
        controller.compare_current_results().await;
    }
    print_outcome(&controller, json)
}
