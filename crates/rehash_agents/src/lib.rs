//! Content generation agents for Rehash.
//!
//! Each [`AgentKind`] turns a [`Dialogue`](rehash_core::Dialogue) into one
//! artifact (an article, a post, a slide deck) with a single backend call.
//! The [`Orchestrator`] runs a selection of agents concurrently against one
//! shared backend and always returns one [`AgentResult`] per agent.
//!
//! # Example
//!
//! ```no_run
//! use rehash_agents::{AgentOptions, Orchestrator};
//! use rehash_core::Dialogue;
//! use rehash_interface::RehashDriver;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(driver: Arc<dyn RehashDriver>, dialogue: Dialogue) -> rehash_error::RehashResult<()> {
//! let orchestrator = Orchestrator::with_agents(["blog", "twitter"], &AgentOptions::default())?;
//! let results = orchestrator
//!     .generate(Arc::new(dialogue), driver, CancellationToken::new())
//!     .await;
//! for result in &results {
//!     println!("{}: {}", result.agent_name(), result.is_success());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod kind;
mod orchestrator;
mod result;
mod theme;

pub use agent::{ContentAgent, FormatAgent};
pub use kind::AgentKind;
pub use orchestrator::Orchestrator;
pub use result::{AgentResult, OutcomeKind, RunSummary, SummaryEntry};
pub use theme::{AgentOptions, DEFAULT_MARP_THEME, resolve_marp_theme};
