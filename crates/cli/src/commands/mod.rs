pub(crate) mod search;
pub(crate) mod status;

use std::sync::Arc;

use anyhow::{Result, bail};
use api_universe_client::ApiClient;
use api_universe_render::render_app;
use api_universe_service::AppController;

use crate::settings::Settings;

pub(crate) fn build_controller(settings: &Settings) -> Result<AppController> {
    let client = ApiClient::with_timeout(&settings.base_url, settings.timeout)?;
    Ok(AppController::new(Arc::new(client)))
}

/// Controller holding a bearer token, or the connection banner as an error.
pub(crate) async fn connect(settings: &Settings) -> Result<AppController> {
    let mut controller = build_controller(settings)?;
    if !controller.authenticate(&settings.user_id).await {
        bail!("{} at {}", controller.state().error, settings.base_url);
    }
    Ok(controller)
}

/// Prints the resulting view (or its JSON model) and fails when the action
/// left an error banner behind.
pub(crate) fn print_outcome(controller: &AppController, json: bool) -> Result<()> {
    let state = controller.state();
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        print!("{}", render_app(state));
    }
    if !state.error.is_empty() {
        bail!("{}", state.error);
    }
    Ok(())
}
