//! Rehash - turn recorded dialogues into publishable content
//!
//! Rehash reads a dialogue transcript (Markdown or JSON), runs a set of
//! content agents concurrently against one LLM backend and writes one
//! artifact per agent plus a `summary.json` run record.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rehash::{
//!     AgentOptions, FormatHint, Orchestrator, RehashConfig, RunSummary, driver_from_config,
//!     parse_file, write_outputs,
//! };
//! use std::sync::Arc;
//! use std::time::Instant;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> rehash::RehashResult<()> {
//! let config = RehashConfig::load()?;
//! let dialogue = parse_file("chat.md", FormatHint::Auto)?;
//! let driver = driver_from_config(&config.model)?;
//!
//! let started = Instant::now();
//! let results = Orchestrator::new(&AgentOptions::default())
//!     .generate(Arc::new(dialogue), driver, CancellationToken::new())
//!     .await;
//!
//! let mut summary = RunSummary::from_results("chat.md", started.elapsed(), &results);
//! write_outputs(&config.generation.output_dir, &results, &mut summary).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `rehash_core` - Dialogue and request data types
//! - `rehash_error` - Error types
//! - `rehash_interface` - `RehashDriver` backend trait
//! - `rehash_transcript` - Tolerant dialogue parsing
//! - `rehash_agents` - Content agents and the concurrent orchestrator
//! - `rehash_models` - Anthropic client, retry wrapper and configuration
//!
//! This crate (`rehash`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod output;

pub use output::{SUMMARY_FILE, WriteReport, write_outputs};

pub use rehash_agents::{
    AgentKind, AgentOptions, AgentResult, ContentAgent, DEFAULT_MARP_THEME, FormatAgent,
    Orchestrator, OutcomeKind, RunSummary, SummaryEntry, resolve_marp_theme,
};
pub use rehash_core::*;
pub use rehash_error::*;
pub use rehash_interface::*;
pub use rehash_models::{
    AnthropicClient, GenerationConfig, ModelConfig, RehashConfig, RetryingDriver,
};
pub use rehash_transcript::{FormatHint, parse, parse_file, parse_json, parse_markdown};

use std::sync::Arc;
use std::time::Duration;

/// Build the shared backend described by `config`: the provider client
/// wrapped in retry with exponential backoff.
///
/// # Errors
///
/// Returns an error if the provider is unsupported or its API key is missing.
pub fn driver_from_config(config: &ModelConfig) -> RehashResult<Arc<dyn RehashDriver>> {
    let client = AnthropicClient::from_config(config)?;
    let driver = RetryingDriver::new(client, config.max_attempts)
        .with_initial_backoff(Duration::from_millis(config.initial_backoff_ms));
    Ok(Arc::new(driver))
}
