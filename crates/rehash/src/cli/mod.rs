//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the rehash binary.

mod commands;
mod generate;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::{list_agents, run_generate};
