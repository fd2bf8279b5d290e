//! Parse, generate and persist in one pass against a stub backend.

use async_trait::async_trait;
use rehash::{
    AgentOptions, FormatHint, GenerateRequest, GenerateResponse, Orchestrator, RehashDriver,
    RehashResult, RunSummary, parse, write_outputs,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

/// Echoes the size of the user prompt so the output depends on the dialogue.
struct EchoDriver;

#[async_trait]
impl RehashDriver for EchoDriver {
    async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse> {
        let prompt = &req.messages()[0].content;
        Ok(GenerateResponse::new(vec![format!(
            "generated from {} chars",
            prompt.len()
        )]))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

const TRANSCRIPT: &str = "# Ownership in Rust\n\n\
**User:** What does the borrow checker do?\n\n\
**Assistant:** It enforces that references never outlive their data.\n";

#[tokio::test]
async fn markdown_transcript_becomes_artifacts() {
    let dialogue = parse(TRANSCRIPT.as_bytes(), FormatHint::Markdown).unwrap();
    assert_eq!(dialogue.title().as_deref(), Some("Ownership in Rust"));
    assert_eq!(dialogue.len(), 2);

    let orchestrator =
        Orchestrator::with_agents(["blog", "revealjs"], &AgentOptions::default()).unwrap();
    let results = orchestrator
        .generate(
            Arc::new(dialogue),
            Arc::new(EchoDriver),
            CancellationToken::new(),
        )
        .await;
    assert!(results.iter().all(|r| r.is_success()));

    let out = TempDir::new().unwrap();
    let mut summary = RunSummary::from_results("chat.md", Duration::from_millis(5), &results);
    let report = write_outputs(out.path(), &results, &mut summary).await.unwrap();

    assert!(report.is_complete());
    assert!(summary.is_complete());
    let blog = std::fs::read_to_string(out.path().join("blog.md")).unwrap();
    assert!(blog.starts_with("generated from "));
    assert!(out.path().join("revealjs.md").exists());
    assert!(!out.path().join("twitter.md").exists());
}
