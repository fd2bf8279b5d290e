//! Per-agent results and run summaries.

use chrono::{DateTime, Utc};
use rehash_error::{JsonError, RehashResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether an agent produced its artifact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutcomeKind {
    /// Content was generated
    Success,
    /// Generation failed; see [`AgentResult::failure`]
    Failure,
}

/// The outcome of one agent in one run.
///
/// Created once when the agent finishes and never changed afterwards.
///
/// # Examples
///
/// ```
/// use rehash_agents::{AgentResult, OutcomeKind};
///
/// let ok = AgentResult::success("blog", "blog.md", "# Title");
/// assert!(ok.is_success());
///
/// let failed = AgentResult::failed("twitter", "twitter.md", "rate limited");
/// assert_eq!(*failed.outcome(), OutcomeKind::Failure);
/// assert!(failed.content().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AgentResult {
    /// Agent identifier
    agent_name: String,
    /// Where the artifact belongs
    output_file: String,
    /// Generated text, empty on failure
    content: String,
    /// Success or failure
    outcome: OutcomeKind,
    /// Rendered error, present only on failure
    failure: Option<String>,
}

impl AgentResult {
    /// A successful result.
    pub fn success(
        agent_name: impl Into<String>,
        output_file: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            output_file: output_file.into(),
            content: content.into(),
            outcome: OutcomeKind::Success,
            failure: None,
        }
    }

    /// A failed result carrying the rendered error.
    pub fn failed(
        agent_name: impl Into<String>,
        output_file: impl Into<String>,
        failure: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            output_file: output_file.into(),
            content: String::new(),
            outcome: OutcomeKind::Failure,
            failure: Some(failure.into()),
        }
    }

    /// True when content was generated.
    pub fn is_success(&self) -> bool {
        self.outcome == OutcomeKind::Success
    }
}

/// One produced artifact in a [`RunSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Agent identifier
    pub agent: String,
    /// File the artifact was written to
    pub file: String,
}

/// Record of a completed run, persisted next to the artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RunSummary {
    /// Identifier of the input dialogue (usually its path)
    input_file: String,
    /// When the run finished
    generated_at: DateTime<Utc>,
    /// Wall-clock duration in milliseconds
    duration_ms: u64,
    /// Artifacts that were produced
    outputs: Vec<SummaryEntry>,
    /// Number of agents that failed
    failed: usize,
}

impl RunSummary {
    /// Summarise a result set.
    ///
    /// Outputs are sorted by agent name so the record is stable across runs.
    pub fn from_results(input_file: impl Into<String>, elapsed: Duration, results: &[AgentResult]) -> Self {
        let mut outputs: Vec<SummaryEntry> = results
            .iter()
            .filter(|r| r.is_success())
            .map(|r| SummaryEntry {
                agent: r.agent_name.clone(),
                file: r.output_file.clone(),
            })
            .collect();
        outputs.sort_by(|a, b| a.agent.cmp(&b.agent));
        Self {
            input_file: input_file.into(),
            generated_at: Utc::now(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            outputs,
            failed: results.iter().filter(|r| !r.is_success()).count(),
        }
    }

    /// Count an artifact that could not be persisted as failed.
    pub fn record_write_failure(&mut self, agent: &str) {
        self.outputs.retain(|entry| entry.agent != agent);
        self.failed += 1;
    }

    /// True when every agent succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> RehashResult<String> {
        Ok(serde_json::to_string_pretty(self).map_err(JsonError::from_display)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_and_sorts() {
        let results = vec![
            AgentResult::success("twitter", "twitter.md", "1/ hi"),
            AgentResult::failed("marp", "marp.md", "boom"),
            AgentResult::success("blog", "blog.md", "# hi"),
        ];
        let summary = RunSummary::from_results("chat.md", Duration::from_millis(1500), &results);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.duration_ms, 1500);
        let agents: Vec<_> = summary.outputs.iter().map(|e| e.agent.as_str()).collect();
        assert_eq!(agents, ["blog", "twitter"]);
    }

    #[test]
    fn write_failure_moves_entry_to_failed() {
        let results = vec![AgentResult::success("blog", "blog.md", "x")];
        let mut summary = RunSummary::from_results("in.json", Duration::ZERO, &results);
        assert!(summary.is_complete());
        summary.record_write_failure("blog");
        assert!(summary.outputs.is_empty());
        assert!(!summary.is_complete());
    }
}
