//! Dialogue recovery for Rehash.
//!
//! Turns a recorded conversation into a [`Dialogue`](rehash_core::Dialogue).
//! Two surface syntaxes are understood:
//!
//! - **JSON**: the structured serialization of the dialogue model
//!   (`title`, `turns`, `metadata`).
//! - **Markdown**: loosely formatted chat logs such as
//!
//! ```text
//! # Debugging a deadlock
//!
//! **User:** The service hangs under load.
//! **Assistant:** Which locks are held across an await?
//! ```
//!
//! # Example
//!
//! ```
//! use rehash_transcript::{FormatHint, parse};
//!
//! let dialogue = parse(b"User: question\nAssistant: answer\n", FormatHint::Auto).unwrap();
//! assert_eq!(dialogue.turns().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod format;
mod markdown;
mod parser;

pub use format::FormatHint;
pub use markdown::parse_markdown;
pub use parser::{parse, parse_file, parse_json};
