//! Entry points that pick a syntax and enforce the "at least one turn" rule.

use crate::{FormatHint, parse_markdown};
use rehash_core::Dialogue;
use rehash_error::{TranscriptError, TranscriptErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// Parse the structured (JSON) form.
///
/// Turns whose content is empty after trimming are dropped. A document that
/// is not valid JSON, or that holds no usable turns, is malformed.
pub fn parse_json(raw: &[u8]) -> Result<Dialogue, TranscriptError> {
    let mut dialogue: Dialogue = serde_json::from_slice(raw).map_err(|e| {
        TranscriptError::new(TranscriptErrorKind::Malformed(format!("invalid JSON: {}", e)))
    })?;
    dialogue.retain_turns(|turn| !turn.content.trim().is_empty());
    if dialogue.is_empty() {
        return Err(TranscriptError::new(TranscriptErrorKind::Malformed(
            "JSON document contains no turns".to_string(),
        )));
    }
    Ok(dialogue)
}

fn parse_lines(raw: &[u8]) -> Result<Dialogue, TranscriptError> {
    let text = String::from_utf8_lossy(raw);
    let dialogue = parse_markdown(&text);
    if dialogue.is_empty() {
        return Err(TranscriptError::new(TranscriptErrorKind::Malformed(
            "no role-tagged turns found".to_string(),
        )));
    }
    Ok(dialogue)
}

/// Recover a dialogue from raw bytes.
///
/// With [`FormatHint::Auto`] the structured form is tried first; any failure
/// there falls through to the line-oriented syntax.
///
/// # Errors
///
/// Returns [`TranscriptErrorKind::Malformed`] when the selected syntax yields
/// no turns, or when an explicit JSON hint meets invalid JSON.
///
/// # Examples
///
/// ```
/// use rehash_transcript::{FormatHint, parse};
///
/// let dialogue = parse(b"# My Chat\nUser: question\nAssistant: answer\n", FormatHint::Auto).unwrap();
/// assert_eq!(dialogue.title().as_deref(), Some("My Chat"));
/// assert_eq!(dialogue.len(), 2);
///
/// assert!(parse(b"just some notes", FormatHint::Auto).is_err());
/// ```
#[instrument(skip(raw), fields(bytes = raw.len()))]
pub fn parse(raw: &[u8], hint: FormatHint) -> Result<Dialogue, TranscriptError> {
    match hint {
        FormatHint::Json => parse_json(raw),
        FormatHint::Markdown => parse_lines(raw),
        FormatHint::Auto => match parse_json(raw) {
            Ok(dialogue) => {
                debug!("Input recognised as JSON");
                Ok(dialogue)
            }
            Err(e) => {
                debug!(reason = %e.kind, "JSON parse failed, falling back to markdown");
                parse_lines(raw)
            }
        },
    }
}

/// Read a file and recover a dialogue from it.
///
/// # Errors
///
/// Returns [`TranscriptErrorKind::Io`] naming the path when the file cannot
/// be read, otherwise whatever [`parse`] returns.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>, hint: FormatHint) -> Result<Dialogue, TranscriptError> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|e| {
        TranscriptError::new(TranscriptErrorKind::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    parse(&raw, hint)
}
