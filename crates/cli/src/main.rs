use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod repl;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "api-universe")]
#[command(
    about = "Discover, compare, and understand APIs using natural language",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Backend base URL [env: API_UNIVERSE_URL]
    #[arg(long, global = true)]
    pub url: Option<String>,
    /// Identity the bearer token is requested for [env: API_UNIVERSE_USER]
    #[arg(long, global = true)]
    pub user: Option<String>,
    /// Request timeout in seconds, 0 for none [env: API_UNIVERSE_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
    /// Disable colour output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Repl,
    /// Semantic search over the API index
    Search {
        query: String,
        /// Print the view model as JSON instead of the rendered view
        #[arg(long)]
        json: bool,
    },
    /// Ask the multi-step agent
    Agent {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Search, then have the agent compare the results
    Compare {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the observability dashboard
    Observability,
    /// Check backend health
    Health,
    /// Fetch live backend metrics
    Metrics,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if cli.global.no_color {
        colored::control::set_override(false);
    }
    let settings = Settings::resolve(&cli.global);
    tracing::info!(base_url = %settings.base_url, user = %settings.user_id, "starting");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(&settings).await,
        Commands::Search { query, json } => {
            commands::search::run_search(&settings, &query, json).await
        },
        Commands::Agent { query, json } => {
            commands::search::run_agent(&settings, &query, json).await
        },
        Commands::Compare { query, json } => {
            commands::search::run_compare(&settings, &query, json).await
        },
        Commands::Observability => commands::status::run_observability(),
        Commands::Health => commands::status::run_health(&settings).await,
        Commands::Metrics => commands::status::run_metrics(&settings).await,
    }
}
