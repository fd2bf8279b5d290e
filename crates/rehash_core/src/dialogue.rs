//! Dialogue model: the structured form of a recorded conversation.

use crate::Role;
use chrono::{DateTime, Utc};
use rehash_error::{JsonError, RehashResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SUMMARY_LIMIT: usize = 200;

/// One role-attributed message within a dialogue.
///
/// # Examples
///
/// ```
/// use rehash_core::{Role, Turn};
///
/// let turn = Turn::new(Role::User, "How do I profile async code?");
/// assert_eq!(turn.role, Role::User);
/// assert!(turn.timestamp.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke
    pub role: Role,
    /// What was said
    pub content: String,
    /// When it was said, if the source recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    /// Create a turn without a timestamp.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    /// Attach a timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A complete conversation with optional title and free-form metadata.
///
/// Turns keep conversation order. Once built, a dialogue is shared read-only
/// between every generation agent.
///
/// # Examples
///
/// ```
/// use rehash_core::{Dialogue, Role, Turn};
///
/// let mut dialogue = Dialogue::new().with_title("Borrowing");
/// dialogue.push(Turn::new(Role::User, "Why can't I mutate this?"));
/// dialogue.push(Turn::new(Role::Assistant, "It is borrowed immutably."));
///
/// assert_eq!(
///     dialogue.to_prompt(),
///     "# Borrowing\n\n**user:** Why can't I mutate this?\n\n**assistant:** It is borrowed immutably.\n\n"
/// );
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Dialogue {
    /// Conversation title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Turns in conversation order
    #[serde(default, alias = "messages")]
    turns: Vec<Turn>,
    /// Free-form string metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
}

impl Dialogue {
    /// Create an empty dialogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a metadata entry, replacing any previous value for the key.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the title only if none has been set yet.
    ///
    /// Returns true when the title was taken.
    pub fn set_title_once(&mut self, title: impl Into<String>) -> bool {
        if self.title.is_some() {
            return false;
        }
        self.title = Some(title.into());
        true
    }

    /// Append a turn at the end of the conversation.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Keep only the turns matching the predicate, preserving order.
    pub fn retain_turns(&mut self, keep: impl FnMut(&Turn) -> bool) {
        self.turns.retain(keep);
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when there are no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Flatten the conversation into the text handed to generation agents.
    ///
    /// Pure function of the title and turns; metadata and timestamps are not
    /// part of the prompt.
    pub fn to_prompt(&self) -> String {
        let mut prompt = String::new();
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            prompt.push_str("# ");
            prompt.push_str(title);
            prompt.push_str("\n\n");
        }
        for turn in &self.turns {
            prompt.push_str("**");
            prompt.push_str(turn.role.as_ref());
            prompt.push_str(":** ");
            prompt.push_str(&turn.content);
            prompt.push_str("\n\n");
        }
        prompt
    }

    /// A short description of what the conversation is about.
    ///
    /// Uses the first user turn (truncated), falling back to the whole first turn.
    pub fn summary(&self) -> String {
        let Some(first) = self.turns.first() else {
            return "Empty conversation".to_string();
        };
        match self.turns.iter().find(|t| t.role == Role::User) {
            Some(turn) => truncate(&turn.content, SUMMARY_LIMIT),
            None => first.content.clone(),
        }
    }

    /// Serialize to the structured (JSON) form.
    pub fn to_json(&self) -> RehashResult<String> {
        Ok(serde_json::to_string_pretty(self).map_err(JsonError::from_display)?)
    }

    /// Parse the structured (JSON) form.
    pub fn from_json(data: &[u8]) -> RehashResult<Self> {
        Ok(serde_json::from_slice(data).map_err(JsonError::from_display)?)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_without_title_has_no_heading() {
        let mut dialogue = Dialogue::new();
        dialogue.push(Turn::new(Role::User, "hello"));
        assert_eq!(dialogue.to_prompt(), "**user:** hello\n\n");
    }

    #[test]
    fn summary_prefers_first_user_turn() {
        let mut dialogue = Dialogue::new();
        dialogue.push(Turn::new(Role::System, "be terse"));
        dialogue.push(Turn::new(Role::User, "what is a lifetime?"));
        assert_eq!(dialogue.summary(), "what is a lifetime?");
    }

    #[test]
    fn summary_truncates_on_char_boundary() {
        let mut dialogue = Dialogue::new();
        dialogue.push(Turn::new(Role::User, "é".repeat(250)));
        let summary = dialogue.summary();
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), SUMMARY_LIMIT + 3);
    }

    #[test]
    fn summary_without_user_turn_keeps_first_turn_whole() {
        let long = "a".repeat(250);
        let mut dialogue = Dialogue::new();
        dialogue.push(Turn::new(Role::Assistant, long.clone()));
        dialogue.push(Turn::new(Role::Assistant, "second"));
        assert_eq!(dialogue.summary(), long);
    }

    #[test]
    fn summary_of_empty_dialogue() {
        assert_eq!(Dialogue::new().summary(), "Empty conversation");
    }

    #[test]
    fn title_is_only_set_once() {
        let mut dialogue = Dialogue::new();
        assert!(dialogue.set_title_once("first"));
        assert!(!dialogue.set_title_once("second"));
        assert_eq!(dialogue.title().as_deref(), Some("first"));
    }
}
