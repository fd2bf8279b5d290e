//! Concurrent fan-out of agents over one dialogue.

use crate::{AgentKind, AgentOptions, AgentResult, ContentAgent, FormatAgent};
use rehash_core::Dialogue;
use rehash_error::{AgentError, AgentErrorKind};
use rehash_interface::RehashDriver;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

type ResultSink = Arc<Mutex<Vec<AgentResult>>>;

/// Runs a fixed set of agents concurrently against one backend.
///
/// Every run yields exactly one [`AgentResult`] per agent. A failing agent
/// never stops its siblings and never turns the run into an error.
pub struct Orchestrator {
    agents: Vec<Arc<dyn ContentAgent>>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("agents", &self.agent_names())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Orchestrator {
    /// Orchestrator over every built-in agent.
    pub fn new(options: &AgentOptions) -> Self {
        let agents = AgentKind::iter()
            .map(|kind| Arc::new(FormatAgent::new(kind, options)) as Arc<dyn ContentAgent>)
            .collect();
        Self::from_agents(agents)
    }

    /// Orchestrator over an explicit selection of built-in agents.
    ///
    /// Names are matched case-insensitively after trimming. The whole
    /// selection is validated before anything is built.
    ///
    /// # Errors
    ///
    /// - [`AgentErrorKind::UnknownAgent`] for a name with no matching agent
    /// - [`AgentErrorKind::DuplicateAgent`] when a name appears twice
    /// - [`AgentErrorKind::EmptySelection`] when no names are given
    ///
    /// # Examples
    ///
    /// ```
    /// use rehash_agents::{AgentOptions, Orchestrator};
    /// use rehash_error::AgentErrorKind;
    ///
    /// let orchestrator = Orchestrator::with_agents(["blog", "Marp"], &AgentOptions::default()).unwrap();
    /// assert_eq!(orchestrator.agent_names(), ["blog", "marp"]);
    ///
    /// let err = Orchestrator::with_agents(["blog", "podcast"], &AgentOptions::default()).unwrap_err();
    /// assert_eq!(err.kind(), &AgentErrorKind::UnknownAgent("podcast".into()));
    /// ```
    #[instrument(skip_all)]
    pub fn with_agents<I, S>(names: I, options: &AgentOptions) -> Result<Self, AgentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kinds = Vec::new();
        let mut seen = HashSet::new();
        for name in names {
            let name = name.as_ref().trim();
            let kind: AgentKind = name
                .parse()
                .map_err(|_| AgentError::new(AgentErrorKind::UnknownAgent(name.to_string())))?;
            if !seen.insert(kind) {
                return Err(AgentError::new(AgentErrorKind::DuplicateAgent(
                    kind.name().to_string(),
                )));
            }
            kinds.push(kind);
        }
        if kinds.is_empty() {
            return Err(AgentError::new(AgentErrorKind::EmptySelection));
        }
        debug!(agents = ?kinds, "Agent selection validated");

        let agents = kinds
            .into_iter()
            .map(|kind| Arc::new(FormatAgent::new(kind, options)) as Arc<dyn ContentAgent>)
            .collect();
        Ok(Self::from_agents(agents))
    }

    /// Orchestrator over caller-supplied agents.
    pub fn from_agents(agents: Vec<Arc<dyn ContentAgent>>) -> Self {
        Self {
            agents,
            timeout: None,
        }
    }

    /// Fail any agent still running after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Names of the agents in this orchestrator, in selection order.
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True when there are no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Run every agent concurrently and collect one result per agent.
    ///
    /// Returns only after all agents have finished, failed, timed out or
    /// observed cancellation. Result order is unspecified.
    #[instrument(skip_all, fields(agents = self.agents.len(), provider = driver.provider_name()))]
    pub async fn generate(
        &self,
        dialogue: Arc<Dialogue>,
        driver: Arc<dyn RehashDriver>,
        cancel: CancellationToken,
    ) -> Vec<AgentResult> {
        let sink: ResultSink = Arc::new(Mutex::new(Vec::with_capacity(self.agents.len())));
        let mut handles = Vec::with_capacity(self.agents.len());

        for agent in &self.agents {
            let name = agent.name().to_string();
            let output_file = agent.output_file().to_string();
            let agent = Arc::clone(agent);
            let dialogue = Arc::clone(&dialogue);
            let driver = Arc::clone(&driver);
            let cancel = cancel.clone();
            let sink = Arc::clone(&sink);
            let timeout = self.timeout;

            debug!(agent = %name, "Spawning agent");
            let handle = tokio::spawn(async move {
                let result =
                    run_agent(agent.as_ref(), &dialogue, driver.as_ref(), &cancel, timeout).await;
                push(&sink, result);
            });
            handles.push((name, output_file, handle));
        }

        for (name, output_file, handle) in handles {
            if let Err(e) = handle.await {
                error!(agent = %name, error = %e, "Agent task aborted");
                let err = AgentError::new(AgentErrorKind::Failed {
                    agent: name.clone(),
                    message: format!("task aborted: {}", e),
                });
                push(&sink, AgentResult::failed(name, output_file, err.kind().to_string()));
            }
        }

        let results = std::mem::take(&mut *sink.lock().unwrap_or_else(PoisonError::into_inner));
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        info!(
            succeeded,
            failed = results.len() - succeeded,
            "Generation run finished"
        );
        results
    }
}

fn push(sink: &ResultSink, result: AgentResult) {
    sink.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(result);
}

async fn run_agent(
    agent: &dyn ContentAgent,
    dialogue: &Dialogue,
    driver: &dyn RehashDriver,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> AgentResult {
    let name = agent.name();
    let work = async {
        let generation = agent.generate(dialogue, driver);
        match timeout {
            Some(limit) => match tokio::time::timeout(limit, generation).await {
                Ok(outcome) => outcome.map_err(|e| failed(name, e)),
                Err(_) => Err(AgentError::new(AgentErrorKind::TimedOut {
                    agent: name.to_string(),
                    elapsed_ms: limit.as_millis(),
                })),
            },
            None => generation.await.map_err(|e| failed(name, e)),
        }
    };

    let outcome = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AgentError::new(AgentErrorKind::Cancelled(name.to_string()))),
        outcome = work => outcome,
    };

    match outcome {
        Ok(content) => {
            debug!(agent = name, bytes = content.len(), "Agent succeeded");
            AgentResult::success(name, agent.output_file(), content)
        }
        Err(e) => {
            warn!(agent = name, error = %e.kind(), "Agent failed");
            AgentResult::failed(name, agent.output_file(), e.kind().to_string())
        }
    }
}

#[track_caller]
fn failed(agent: &str, err: impl std::fmt::Display) -> AgentError {
    AgentError::new(AgentErrorKind::Failed {
        agent: agent.to_string(),
        message: err.to_string(),
    })
}
