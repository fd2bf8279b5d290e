//! Agent selection and execution errors.

/// Specific agent error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AgentErrorKind {
    /// Caller asked for an agent that does not exist
    #[display("Unknown agent: {}", _0)]
    UnknownAgent(String),

    /// Caller asked for the same agent twice
    #[display("Agent requested more than once: {}", _0)]
    DuplicateAgent(String),

    /// Caller asked for no agents at all
    #[display("Agent selection is empty")]
    EmptySelection,

    /// An agent ran but could not produce its artifact
    #[display("Agent '{}' failed: {}", agent, message)]
    Failed {
        /// The agent name
        agent: String,
        /// Rendered cause
        message: String,
    },

    /// The run was cancelled before the agent finished
    #[display("Agent '{}' was cancelled", _0)]
    Cancelled(String),

    /// The agent did not finish within the run timeout
    #[display("Agent '{}' timed out after {} ms", agent, elapsed_ms)]
    TimedOut {
        /// The agent name
        agent: String,
        /// Configured timeout in milliseconds
        elapsed_ms: u128,
    },
}

/// Agent error with location tracking.
///
/// # Examples
///
/// ```
/// use rehash_error::{AgentError, AgentErrorKind};
///
/// let err = AgentError::new(AgentErrorKind::UnknownAgent("podcast".into()));
/// assert!(format!("{}", err).contains("podcast"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Agent Error: {} at line {} in {}", kind, line, file)]
pub struct AgentError {
    kind: AgentErrorKind,
    line: u32,
    file: &'static str,
}

impl AgentError {
    /// Create a new agent error with caller location tracking.
    #[track_caller]
    pub fn new(kind: AgentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AgentErrorKind {
        &self.kind
    }
}
