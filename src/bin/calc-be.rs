//! calc-be CLI: resolves and reports the backend startup configuration.

use calc_be::config::Config;
use calc_be::config::env_file::{self, EnvFileOutcome};
use calc_be::config::secrets;
use calc_be::telemetry::{TelemetryConfig, init_telemetry};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc-be", about = "Calculator backend configuration")]
struct Cli {
    /// Load this env file instead of discovering `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved configuration (the API key is never shown)
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_outcome = match cli.env_file.as_deref() {
        Some(path) => env_file::load(path),
        None => env_file::load_default(),
    };

    let config = Config::from_env();

    let guard = init_telemetry(TelemetryConfig::from_env("calc-be", &config))?;
    env_outcome.report();
    if cli.env_file.is_some() && matches!(env_outcome, EnvFileOutcome::Missing) {
        tracing::warn!("requested env file does not exist; using process environment");
    }

    tracing::info!(
        server_url = %config.server_url,
        port = %config.port,
        environment = %config.environment,
        development = config.is_development(),
        otlp_export = guard.is_exporting(),
        gemini_api_key = secrets::redacted(config.gemini_api_key.as_ref()),
        "configuration resolved"
    );
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set");
    }

    match cli.command.unwrap_or(Command::Show { json: false }) {
        Command::Show { json } => cmd_show(&config, json),
    }
}

fn cmd_show(config: &Config, json: bool) -> anyhow::Result<()> {
    let summary = config.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
