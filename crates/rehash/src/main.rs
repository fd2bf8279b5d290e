//! Rehash CLI binary.
//!
//! - Generate content artifacts from a dialogue file
//! - List the available agents

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, list_agents, run_generate};

    // API keys may live in a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args, cli.config.as_deref()).await?;
        }

        Commands::ListAgents => {
            list_agents();
        }

        Commands::Version => {
            println!("rehash {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
