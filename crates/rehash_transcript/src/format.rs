//! Input syntax selection.

use std::path::Path;

/// Which syntax the raw input is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatHint {
    /// Structured JSON only; no fallback
    Json,
    /// Line-oriented chat Markdown only
    Markdown,
    /// Try JSON, fall back to Markdown
    #[default]
    Auto,
}

impl FormatHint {
    /// Pick a hint from a file extension (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use rehash_transcript::FormatHint;
    ///
    /// assert_eq!(FormatHint::from_path("chat.JSON"), FormatHint::Json);
    /// assert_eq!(FormatHint::from_path("notes/chat.md"), FormatHint::Markdown);
    /// assert_eq!(FormatHint::from_path("export.txt"), FormatHint::Auto);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => FormatHint::Json,
            Some("md") | Some("markdown") => FormatHint::Markdown,
            _ => FormatHint::Auto,
        }
    }
}
