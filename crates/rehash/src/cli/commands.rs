//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Rehash - turn recorded dialogues into articles, posts and slide decks
#[derive(Parser, Debug)]
#[command(name = "rehash")]
#[command(about = "Turn recorded dialogues into articles, posts and slide decks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (replaces the ./rehash.toml and home lookups)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate content from a dialogue file
    Generate(GenerateArgs),

    /// List the available agents
    ListAgents,

    /// Print the version
    Version,
}

/// Arguments for `rehash generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Dialogue file (.md, .json or plain text)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory [default: from config, ./output]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Marp theme: a CSS file path or a built-in theme name
    #[arg(long)]
    pub theme: Option<String>,

    /// Comma-separated agents to run [default: all]
    #[arg(long, value_delimiter = ',')]
    pub agents: Option<Vec<String>>,

    /// Model identifier override
    #[arg(long)]
    pub model: Option<String>,

    /// Abort agents still running after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Total backend calls per agent, including the first
    #[arg(long)]
    pub max_attempts: Option<usize>,
}
