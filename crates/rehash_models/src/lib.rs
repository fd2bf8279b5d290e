//! LLM provider integrations for Rehash.
//!
//! - [`AnthropicClient`]: the Anthropic Messages API over `reqwest`
//! - [`RetryingDriver`]: exponential-backoff retry around any backend
//! - [`RehashConfig`]: layered configuration
//!
//! # Example
//!
//! ```no_run
//! use rehash_models::{AnthropicClient, RehashConfig, RetryingDriver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RehashConfig::load()?;
//! let client = AnthropicClient::from_config(&config.model)?;
//! let driver = RetryingDriver::new(client, config.model.max_attempts);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod config;
mod retry;

pub use anthropic::*;
pub use config::{GenerationConfig, ModelConfig, RehashConfig};
pub use retry::RetryingDriver;
