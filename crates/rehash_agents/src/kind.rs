//! The closed catalogue of output formats.

use serde::{Deserialize, Serialize};

const CONVERSATION_SLOT: &str = "{conversation}";

/// Every artifact Rehash knows how to produce.
///
/// Names are lowercase and parse case-insensitively.
///
/// # Examples
///
/// ```
/// use rehash_agents::AgentKind;
/// use strum::IntoEnumIterator;
///
/// let kind: AgentKind = "RevealJS".parse().unwrap();
/// assert_eq!(kind, AgentKind::Revealjs);
/// assert_eq!(kind.output_file(), "revealjs.md");
/// assert_eq!(AgentKind::iter().count(), 6);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AgentKind {
    /// Long-form article for general blogging platforms
    Blog,
    /// Developer article with front matter
    Devto,
    /// Professional network post
    Linkedin,
    /// Numbered micro-post thread
    Twitter,
    /// Marp slide deck
    Marp,
    /// Reveal.js slide deck
    Revealjs,
}

impl AgentKind {
    /// Stable identifier, also used in result sets.
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Blog => "blog",
            AgentKind::Devto => "devto",
            AgentKind::Linkedin => "linkedin",
            AgentKind::Twitter => "twitter",
            AgentKind::Marp => "marp",
            AgentKind::Revealjs => "revealjs",
        }
    }

    /// File name the artifact is written to.
    pub fn output_file(&self) -> String {
        format!("{}.md", self.name())
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Blog => "Blog article (Medium, Substack, personal blogs)",
            AgentKind::Devto => "Technical article for dev.to with front matter",
            AgentKind::Linkedin => "LinkedIn post",
            AgentKind::Twitter => "Twitter/X thread",
            AgentKind::Marp => "Marp presentation slides",
            AgentKind::Revealjs => "Reveal.js presentation slides",
        }
    }

    /// Persona instruction template.
    ///
    /// The Marp template contains a `{theme}` slot filled at construction.
    pub(crate) fn system_template(&self) -> &'static str {
        match self {
            AgentKind::Blog => include_str!("../prompts/blog.md"),
            AgentKind::Devto => include_str!("../prompts/devto.md"),
            AgentKind::Linkedin => include_str!("../prompts/linkedin.md"),
            AgentKind::Twitter => include_str!("../prompts/twitter.md"),
            AgentKind::Marp => include_str!("../prompts/marp.md"),
            AgentKind::Revealjs => include_str!("../prompts/revealjs.md"),
        }
    }

    /// Request wrapped around the flattened conversation.
    pub(crate) fn user_template(&self) -> &'static str {
        match self {
            AgentKind::Blog => {
                "Rewrite the conversation below as a blog article.\n\n{conversation}\n\nKeep the insights that would matter to a reader who was not there."
            }
            AgentKind::Devto => {
                "Rewrite the conversation below as a technical dev.to article.\n\n{conversation}\n\nFavour working code and concrete detail over summary."
            }
            AgentKind::Linkedin => {
                "Rewrite the conversation below as a LinkedIn post.\n\n{conversation}\n\nShare the main takeaway in a way that invites discussion."
            }
            AgentKind::Twitter => {
                "Rewrite the conversation below as a Twitter/X thread.\n\n{conversation}\n\nBreak the key ideas into posts people will want to share."
            }
            AgentKind::Marp => {
                "Rewrite the conversation below as a Marp slide deck.\n\n{conversation}\n\nPresent the key points clearly, one idea per slide."
            }
            AgentKind::Revealjs => {
                "Rewrite the conversation below as a Reveal.js slide deck.\n\n{conversation}\n\nUse vertical stacks for supporting detail."
            }
        }
    }

    /// Fill the user template with a flattened conversation.
    pub(crate) fn render_prompt(&self, conversation: &str) -> String {
        self.user_template().replace(CONVERSATION_SLOT, conversation)
    }
}
