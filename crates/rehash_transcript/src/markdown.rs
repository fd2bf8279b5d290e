//! Line-oriented chat syntax.
//!
//! Recognised lines:
//!
//! - `# Title` sets the dialogue title (first one wins, the rest are dropped)
//! - `**User:** text`, `**User**: text` or `User: text` start a new turn
//! - anything else continues the current turn, or is ignored before the
//!   first role marker

use regex::Regex;
use rehash_core::{Dialogue, Role, Turn};
use std::sync::LazyLock;
use tracing::{debug, trace};

struct LineGrammar {
    title: Regex,
    emphasized_role: Regex,
    bare_role: Regex,
}

static GRAMMAR: LazyLock<LineGrammar> = LazyLock::new(|| LineGrammar {
    title: Regex::new(r"^#\s+(.+)$").expect("Valid title regex"),
    emphasized_role: Regex::new(r"^\*\*(?i:(user|assistant|system))(?::\*\*|\*\*:)\s*(.*)$")
        .expect("Valid emphasized role regex"),
    bare_role: Regex::new(r"^(?i:(user|assistant|system)):\s*(.*)$")
        .expect("Valid bare role regex"),
});

/// Classification of one input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Title(&'a str),
    RoleMarker { role: Role, inline: &'a str },
    Text(&'a str),
}

impl LineGrammar {
    fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        if let Some(caps) = self.title.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str());
            return Line::Title(title);
        }
        // The bare form also matches inside emphasis, so emphasis goes first.
        for pattern in [&self.emphasized_role, &self.bare_role] {
            if let Some(caps) = pattern.captures(line) {
                let name = caps.get(1).map_or("", |m| m.as_str());
                if let Ok(role) = name.parse::<Role>() {
                    let inline = caps.get(2).map_or("", |m| m.as_str());
                    return Line::RoleMarker { role, inline };
                }
            }
        }
        Line::Text(line)
    }
}

/// The in-progress turn.
#[derive(Default)]
struct Pending {
    role: Option<Role>,
    buffer: String,
}

impl Pending {
    fn flush_into(&mut self, dialogue: &mut Dialogue) {
        let content = self.buffer.trim();
        if let Some(role) = self.role
            && !content.is_empty()
        {
            dialogue.push(Turn::new(role, content));
        } else if self.role.is_some() {
            trace!("Dropping turn with empty content");
        }
        self.buffer.clear();
    }

    fn start(&mut self, role: Role, inline: &str) {
        self.role = Some(role);
        if !inline.is_empty() {
            self.buffer.push_str(inline);
        }
    }

    fn append(&mut self, line: &str) {
        if self.role.is_none() {
            return;
        }
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }
}

/// Recover a dialogue from chat-style Markdown.
///
/// Never fails: unrecognised lines are ignored or folded into the current
/// turn. Callers decide whether a dialogue without turns is acceptable.
///
/// # Examples
///
/// ```
/// use rehash_core::Role;
/// use rehash_transcript::parse_markdown;
///
/// let dialogue = parse_markdown("**User:** hello\n**Assistant:** hi there\n");
/// assert!(dialogue.title().is_none());
/// assert_eq!(dialogue.turns()[1].role, Role::Assistant);
/// assert_eq!(dialogue.turns()[1].content, "hi there");
/// ```
pub fn parse_markdown(text: &str) -> Dialogue {
    let grammar = &*GRAMMAR;
    let mut dialogue = Dialogue::new();
    let mut pending = Pending::default();

    for line in text.lines() {
        match grammar.classify(line) {
            Line::Title(title) => {
                if !dialogue.set_title_once(title) {
                    trace!(heading = title, "Ignoring subsequent heading");
                }
            }
            Line::RoleMarker { role, inline } => {
                pending.flush_into(&mut dialogue);
                pending.start(role, inline);
            }
            Line::Text(text) => pending.append(text),
        }
    }
    pending.flush_into(&mut dialogue);

    debug!(
        turns = dialogue.len(),
        has_title = dialogue.title().is_some(),
        "Recovered dialogue from markdown"
    );
    dialogue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_headings() {
        assert_eq!(GRAMMAR.classify("# Hello world"), Line::Title("Hello world"));
        assert_eq!(GRAMMAR.classify("## Section"), Line::Text("## Section"));
        assert_eq!(GRAMMAR.classify("#nospace"), Line::Text("#nospace"));
    }

    #[test]
    fn classifies_role_markers_in_all_forms() {
        for line in ["**User:** hi", "**user**: hi", "User: hi", "USER:hi"] {
            assert_eq!(
                GRAMMAR.classify(line),
                Line::RoleMarker {
                    role: Role::User,
                    inline: "hi"
                },
                "line {line:?}"
            );
        }
    }

    #[test]
    fn role_marker_must_start_the_line() {
        assert_eq!(
            GRAMMAR.classify("  User: indented"),
            Line::Text("  User: indented")
        );
        assert_eq!(GRAMMAR.classify("Username: x"), Line::Text("Username: x"));
    }

    #[test]
    fn emphasized_marker_keeps_inline_text_clean() {
        assert_eq!(
            GRAMMAR.classify("**Assistant:**    spaced"),
            Line::RoleMarker {
                role: Role::Assistant,
                inline: "spaced"
            }
        );
    }
}
