use rehash_core::{Dialogue, Role, Turn};
use rehash_transcript::{FormatHint, parse, parse_file};
use std::io::Write;

fn roles_and_contents(dialogue: &Dialogue) -> Vec<(Role, &str)> {
    dialogue
        .turns()
        .iter()
        .map(|t| (t.role, t.content.as_str()))
        .collect()
}

#[test]
fn emphasized_markers_without_title() {
    let dialogue = parse(b"**User:** hello\n**Assistant:** hi there\n", FormatHint::Auto).unwrap();
    assert!(dialogue.title().is_none());
    assert_eq!(
        roles_and_contents(&dialogue),
        vec![(Role::User, "hello"), (Role::Assistant, "hi there")]
    );
}

#[test]
fn bare_markers_with_title() {
    let dialogue = parse(b"# My Chat\nUser: question\nAssistant: answer\n", FormatHint::Markdown).unwrap();
    assert_eq!(dialogue.title().as_deref(), Some("My Chat"));
    assert_eq!(
        roles_and_contents(&dialogue),
        vec![(Role::User, "question"), (Role::Assistant, "answer")]
    );
}

#[test]
fn first_heading_wins_and_later_headings_are_dropped() {
    let raw = "# First\nUser: a\n# Second\nmore text\n";
    let dialogue = parse(raw.as_bytes(), FormatHint::Markdown).unwrap();
    assert_eq!(dialogue.title().as_deref(), Some("First"));
    assert_eq!(roles_and_contents(&dialogue), vec![(Role::User, "a\nmore text")]);
}

#[test]
fn continuation_lines_keep_inner_blank_lines() {
    let raw = "User: first line\n\nsecond paragraph\n  indented\n\nAssistant:\ncode follows\n\n";
    let dialogue = parse(raw.as_bytes(), FormatHint::Markdown).unwrap();
    assert_eq!(
        roles_and_contents(&dialogue),
        vec![
            (Role::User, "first line\n\nsecond paragraph\n  indented"),
            (Role::Assistant, "code follows"),
        ]
    );
}

#[test]
fn preamble_before_first_marker_is_discarded() {
    let raw = "exported on tuesday\nsome header noise\n**User:** real start\n";
    let dialogue = parse(raw.as_bytes(), FormatHint::Markdown).unwrap();
    assert_eq!(roles_and_contents(&dialogue), vec![(Role::User, "real start")]);
}

#[test]
fn empty_turns_are_dropped() {
    let raw = "User:\n\nAssistant:   \nSystem: kept\n";
    let dialogue = parse(raw.as_bytes(), FormatHint::Markdown).unwrap();
    assert_eq!(roles_and_contents(&dialogue), vec![(Role::System, "kept")]);
}

#[test]
fn every_emitted_turn_has_trimmed_nonempty_content() {
    let raw = "# t\nUser:   padded   \n\n\nassistant: x\n   \nSYSTEM:\n \n**User**: y \n";
    let dialogue = parse(raw.as_bytes(), FormatHint::Auto).unwrap();
    assert!(!dialogue.is_empty());
    for turn in dialogue.turns() {
        assert!(!turn.content.is_empty());
        assert_eq!(turn.content, turn.content.trim());
    }
}

#[test]
fn crlf_line_endings_are_handled() {
    let raw = "# Windows\r\nUser: one\r\ntwo\r\nAssistant: three\r\n";
    let dialogue = parse(raw.as_bytes(), FormatHint::Markdown).unwrap();
    assert_eq!(dialogue.title().as_deref(), Some("Windows"));
    assert_eq!(
        roles_and_contents(&dialogue),
        vec![(Role::User, "one\ntwo"), (Role::Assistant, "three")]
    );
}

#[test]
fn json_input_is_detected_automatically() {
    let mut original = Dialogue::new().with_title("Structured");
    original.push(Turn::new(Role::User, "q"));
    original.push(Turn::new(Role::Assistant, "a"));
    let json = original.to_json().unwrap();

    let dialogue = parse(json.as_bytes(), FormatHint::Auto).unwrap();
    assert_eq!(dialogue, original);
}

#[test]
fn json_turns_with_blank_content_are_dropped() {
    let raw = br#"{"turns":[{"role":"user","content":"  "},{"role":"assistant","content":"ok"}]}"#;
    let dialogue = parse(raw, FormatHint::Json).unwrap();
    assert_eq!(roles_and_contents(&dialogue), vec![(Role::Assistant, "ok")]);
}

#[test]
fn explicit_json_hint_does_not_fall_back() {
    let err = parse(b"User: hello\n", FormatHint::Json).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn unrecognisable_input_is_malformed() {
    let err = parse(b"nothing here looks like a chat\n", FormatHint::Auto).unwrap_err();
    assert!(err.is_malformed());
    let err = parse(b"", FormatHint::Markdown).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn json_without_turns_falls_back_then_fails() {
    let err = parse(br#"{"title":"empty"}"#, FormatHint::Auto).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn parse_file_uses_the_given_hint() {
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    writeln!(file, "# From disk").unwrap();
    writeln!(file, "**User:** hi").unwrap();
    writeln!(file, "**Assistant:** hello").unwrap();
    file.flush().unwrap();

    let hint = FormatHint::from_path(file.path());
    assert_eq!(hint, FormatHint::Markdown);
    let dialogue = parse_file(file.path(), hint).unwrap();
    assert_eq!(dialogue.title().as_deref(), Some("From disk"));
    assert_eq!(dialogue.len(), 2);
}

#[test]
fn missing_file_is_an_io_error_naming_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.md");
    let err = parse_file(&path, FormatHint::Auto).unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("absent.md"));
}
