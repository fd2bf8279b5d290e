//! Error types for the Rehash toolkit.
//!
//! This crate provides the foundation error types used throughout the Rehash workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Everything converts into [`RehashError`] so callers can use `?` freely.
//!
//! # Examples
//!
//! ```
//! use rehash_error::{RehashResult, TranscriptError, TranscriptErrorKind};
//!
//! fn load() -> RehashResult<String> {
//!     Err(TranscriptError::new(TranscriptErrorKind::Malformed(
//!         "no turns found".to_string(),
//!     )))?
//! }
//!
//! match load() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod backend;
mod config;
mod error;
mod json;
mod models;
mod retry;
mod storage;
mod transcript;

pub use agent::{AgentError, AgentErrorKind};
pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{RehashError, RehashErrorKind, RehashResult};
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use retry::RetryableError;
pub use storage::{StorageError, StorageErrorKind};
pub use transcript::{TranscriptError, TranscriptErrorKind};
