use chrono::{TimeZone, Utc};
use rehash_core::{Dialogue, Role, Turn};

fn sample() -> Dialogue {
    let mut dialogue = Dialogue::new()
        .with_title("Async cancellation")
        .with_metadata("source", "meetup-notes")
        .with_metadata("speaker", "guest");
    dialogue.push(
        Turn::new(Role::User, "How do I cancel a spawned task?")
            .at(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()),
    );
    dialogue.push(Turn::new(
        Role::Assistant,
        "Drop the future, or abort the JoinHandle.\n\nA token works for cooperative shutdown.",
    ));
    dialogue.push(Turn::new(Role::System, "session ended"));
    dialogue
}

#[test]
fn json_round_trip_preserves_every_field() {
    let dialogue = sample();
    let json = dialogue.to_json().unwrap();
    let back = Dialogue::from_json(json.as_bytes()).unwrap();
    assert_eq!(back, dialogue);
}

#[test]
fn json_uses_turns_field_and_lowercase_roles() {
    let json = sample().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["turns"][0]["role"], "user");
    assert_eq!(value["turns"][1]["role"], "assistant");
    assert_eq!(value["metadata"]["source"], "meetup-notes");
    assert!(value["turns"][1].get("timestamp").is_none());
}

#[test]
fn json_accepts_messages_alias_and_mixed_case_roles() {
    let raw = br#"{
        "title": "Legacy export",
        "messages": [
            {"role": "User", "content": "ping"},
            {"role": "ASSISTANT", "content": "pong", "timestamp": "2024-06-01T12:00:00Z"}
        ]
    }"#;
    let dialogue = Dialogue::from_json(raw).unwrap();
    assert_eq!(dialogue.title().as_deref(), Some("Legacy export"));
    assert_eq!(dialogue.turns().len(), 2);
    assert_eq!(dialogue.turns()[1].role, Role::Assistant);
    assert!(dialogue.turns()[1].timestamp.is_some());
    assert!(dialogue.metadata().is_empty());
}

#[test]
fn json_without_title_round_trips_as_none() {
    let mut dialogue = Dialogue::new();
    dialogue.push(Turn::new(Role::User, "untitled"));
    let json = dialogue.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("title").is_none());
    let back = Dialogue::from_json(json.as_bytes()).unwrap();
    assert!(back.title().is_none());
}

#[test]
fn prompt_flattening_is_deterministic() {
    let dialogue = sample();
    let first = dialogue.to_prompt();
    let second = dialogue.to_prompt();
    assert_eq!(first, second);
    assert!(first.starts_with("# Async cancellation\n\n**user:** How do I cancel"));
    assert!(first.ends_with("**system:** session ended\n\n"));
    assert!(!first.contains("meetup-notes"));
}
