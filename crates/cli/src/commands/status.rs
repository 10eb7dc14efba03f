use anyhow::{Result, bail};
use api_universe_core::View;
use api_universe_render::render_app;
use api_universe_service::AppState;

use super::{build_controller, connect};
use crate::settings::Settings;

pub(crate) fn run_observability() -> Result<()> {
    let state = AppState { view: View::Observability, ..AppState::default() };
    print!("{}", render_app(&state));
    Ok(())
}

pub(crate) async fn run_health(settings: &Settings) -> Result<()> {
    let controller = build_controller(settings)?;
    let health = controller.health().await?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    if !health.is_healthy() {
        bail!("backend reports status {:?}", health.status);
    }
    Ok(())
}

pub(crate) async fn run_metrics(settings: &Settings) -> Result<()> {
    let controller = connect(settings).await?;
    let metrics = controller.metrics().await?;
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
