//! Trait definitions for Rehash backends.
//!
//! Everything that talks to an upstream text generator implements
//! [`RehashDriver`]; generation agents only ever see the trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{RehashDriver, generate_text};
