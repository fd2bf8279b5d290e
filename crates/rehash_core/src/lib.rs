//! Core data types for Rehash.
//!
//! This crate provides the dialogue model shared by the parser and the
//! generation agents, plus the request/response types exchanged with backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dialogue;
mod request;
mod role;

pub use dialogue::{Dialogue, Turn};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message, MessageBuilder};
pub use role::Role;
