//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who spoke a turn.
///
/// Parsing is case-insensitive; rendering is always lowercase, which is the
/// form that appears in prompts and in the structured serialization.
///
/// # Examples
///
/// ```
/// use rehash_core::Role;
/// use std::str::FromStr;
///
/// assert_eq!(Role::from_str("ASSISTANT").unwrap(), Role::Assistant);
/// assert_eq!(Role::System.to_string(), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    Assistant,
}

impl TryFrom<String> for Role {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_ref().to_string()
    }
}
