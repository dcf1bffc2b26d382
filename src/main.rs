//! CLI entry point for the arXiv research assistant.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

mod app_config;
mod cli;
mod commands;

use app_config::VerbositySetting;
use cli::{Cli, Command};
use commands::RunContext;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's env fallbacks see LANGFLOW_TOKEN and friends
    let dotenv_path = dotenvy::dotenv().ok();

    // Parse CLI arguments before tracing, so --help works without logs
    let cli = Cli::parse();

    let loaded = app_config::load_config(cli.config.as_deref())?;

    let default_level = default_log_level(cli.quiet, cli.verbose, loaded.config.verbosity);
    init_tracing(default_level);

    if let Some(path) = &dotenv_path {
        debug!(path = %path.display(), "Loaded .env file");
    }
    if loaded.loaded_from_file
        && let Some(path) = &loaded.path
    {
        debug!(path = %path.display(), "Loaded config file");
    }
    info!("arxiv-assistant starting");

    let ctx = RunContext {
        quiet: cli.quiet,
        file_config: loaded.config,
    };

    match &cli.command {
        Command::Ask(args) => commands::run_ask_command(args, &ctx).await,
        Command::Parse(args) => commands::run_parse_command(args, &ctx),
        Command::Chat(args) => commands::run_chat_command(args, &ctx).await,
    }
}

/// Default log filter when `RUST_LOG` is unset.
///
/// Priority: quiet flag > verbose flag > config verbosity > `warn`.
fn default_log_level(quiet: bool, verbose: u8, config: Option<VerbositySetting>) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config.map_or("warn", VerbositySetting::default_level),
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
