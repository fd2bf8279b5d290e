//! Per-agent options and Marp theme resolution.

use std::path::Path;
use tracing::{debug, warn};

/// Theme token used when no usable theme is supplied.
pub const DEFAULT_MARP_THEME: &str = "default";

const THEME_INDENT: &str = "    ";

/// Options applied when constructing agents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentOptions {
    /// Marp theme: a CSS file path or a theme name
    pub marp_theme: Option<String>,
}

impl AgentOptions {
    /// Options with a Marp theme set.
    pub fn with_marp_theme(theme: impl Into<String>) -> Self {
        Self {
            marp_theme: Some(theme.into()),
        }
    }
}

/// Resolve a theme setting into the value placed after `theme:` in Marp front matter.
///
/// - readable file: `custom` plus the file embedded as a YAML `style` block
/// - existing but unreadable path: [`DEFAULT_MARP_THEME`]
/// - anything else: used as the theme name
///
/// # Examples
///
/// ```
/// use rehash_agents::resolve_marp_theme;
///
/// assert_eq!(resolve_marp_theme(None), "default");
/// assert_eq!(resolve_marp_theme(Some("gaia")), "gaia");
/// ```
pub fn resolve_marp_theme(setting: Option<&str>) -> String {
    let Some(value) = setting.filter(|v| !v.is_empty()) else {
        return DEFAULT_MARP_THEME.to_string();
    };

    let path = Path::new(value);
    if !path.exists() {
        debug!(theme = value, "Using theme name");
        return value.to_string();
    }

    match std::fs::read_to_string(path) {
        Ok(css) => {
            debug!(path = value, bytes = css.len(), "Embedding custom theme");
            format!("custom\nstyle: |\n{}", indent_block(&css))
        }
        Err(e) => {
            warn!(path = value, error = %e, "Theme file unreadable, using default theme");
            DEFAULT_MARP_THEME.to_string()
        }
    }
}

fn indent_block(text: &str) -> String {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.split('\n')
        .map(|line| format!("{THEME_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_every_line() {
        assert_eq!(indent_block("a {\n}"), "    a {\n    }");
    }

    #[test]
    fn trailing_newline_leaves_no_blank_indented_line() {
        assert_eq!(indent_block("a {\n}\n"), "    a {\n    }");
        assert_eq!(indent_block("a {\n}\n\n"), "    a {\n    }\n    ");
    }

    #[test]
    fn empty_setting_is_default() {
        assert_eq!(resolve_marp_theme(Some("")), DEFAULT_MARP_THEME);
    }
}
