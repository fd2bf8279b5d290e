mod test_utils;

use rehash_agents::{AgentKind, AgentOptions, ContentAgent, DEFAULT_MARP_THEME, FormatAgent, resolve_marp_theme};
use std::io::Write;
use strum::IntoEnumIterator;
use test_utils::{MockDriver, sample_dialogue};

#[test]
fn prompt_embeds_the_flattened_dialogue() {
    let dialogue = sample_dialogue();
    for kind in AgentKind::iter() {
        let agent = FormatAgent::new(kind, &AgentOptions::default());
        let prompt = agent.build_prompt(&dialogue);
        assert!(prompt.contains(&dialogue.to_prompt()), "{kind}");
        assert!(!prompt.contains("{conversation}"), "{kind}");
        assert_eq!(agent.output_file(), format!("{}.md", kind));
    }
}

#[test]
fn build_prompt_is_deterministic() {
    let agent = FormatAgent::new(AgentKind::Twitter, &AgentOptions::default());
    let dialogue = sample_dialogue();
    assert_eq!(agent.build_prompt(&dialogue), agent.build_prompt(&dialogue));
}

#[tokio::test]
async fn generate_makes_exactly_one_call_with_the_persona() {
    let driver = MockDriver::new_success("1/ hello");
    let agent = FormatAgent::new(AgentKind::Twitter, &AgentOptions::default());

    let text = agent.generate(&sample_dialogue(), &driver).await.unwrap();

    assert_eq!(text, "1/ hello");
    assert_eq!(driver.call_count(), 1);
    let requests = driver.requests();
    assert_eq!(requests[0].system().as_deref(), Some(agent.system_prompt()));
    assert_eq!(requests[0].messages().len(), 1);
    assert!(requests[0].messages()[0].content.contains("When should I reach for Arc?"));
}

#[test]
fn marp_uses_default_theme_without_options() {
    let agent = FormatAgent::new(AgentKind::Marp, &AgentOptions::default());
    assert!(agent.system_prompt().contains("theme: default\n"));
    assert!(!agent.system_prompt().contains("{theme}"));
}

#[test]
fn marp_theme_name_is_used_literally() {
    let agent = FormatAgent::new(AgentKind::Marp, &AgentOptions::with_marp_theme("uncover"));
    assert!(agent.system_prompt().contains("theme: uncover\n"));
}

#[test]
fn marp_theme_file_is_embedded_as_style_block() {
    let mut css = tempfile::Builder::new().suffix(".css").tempfile().unwrap();
    write!(css, "section {{\n  color: navy;\n}}").unwrap();
    css.flush().unwrap();
    let path = css.path().to_str().unwrap();

    let theme = resolve_marp_theme(Some(path));
    assert_eq!(theme, "custom\nstyle: |\n    section {\n      color: navy;\n    }");

    let agent = FormatAgent::new(AgentKind::Marp, &AgentOptions::with_marp_theme(path));
    assert!(agent.system_prompt().contains("theme: custom\nstyle: |\n    section {"));
}

#[test]
fn theme_file_with_trailing_newline_ends_on_last_rule() {
    let mut css = tempfile::Builder::new().suffix(".css").tempfile().unwrap();
    writeln!(css, "h1 {{ color: red; }}").unwrap();
    css.flush().unwrap();

    let theme = resolve_marp_theme(css.path().to_str());
    assert_eq!(theme, "custom\nstyle: |\n    h1 { color: red; }");
}

#[test]
fn unreadable_theme_path_falls_back_to_default() {
    // A directory exists but cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();
    let theme = resolve_marp_theme(dir.path().to_str());
    assert_eq!(theme, DEFAULT_MARP_THEME);
}

#[test]
fn other_agents_ignore_the_theme() {
    let plain = FormatAgent::new(AgentKind::Revealjs, &AgentOptions::default());
    let themed = FormatAgent::new(AgentKind::Revealjs, &AgentOptions::with_marp_theme("gaia"));
    assert_eq!(plain.system_prompt(), themed.system_prompt());
}
