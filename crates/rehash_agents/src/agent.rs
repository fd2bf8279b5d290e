//! The generation task abstraction.

use crate::{AgentKind, AgentOptions, resolve_marp_theme};
use async_trait::async_trait;
use rehash_core::Dialogue;
use rehash_error::RehashResult;
use rehash_interface::{RehashDriver, generate_text};

/// A named unit of work that turns a dialogue into one text artifact.
///
/// Agents are stateless descriptors. The same agent may run concurrently with
/// itself; everything a run needs arrives through the arguments.
#[async_trait]
pub trait ContentAgent: Send + Sync {
    /// Stable identifier used in selections and results.
    fn name(&self) -> &str;

    /// File name the artifact is written to.
    fn output_file(&self) -> &str;

    /// Fixed persona instruction sent with every call.
    fn system_prompt(&self) -> &str;

    /// Build the user prompt for a dialogue. Pure.
    fn build_prompt(&self, dialogue: &Dialogue) -> String;

    /// Produce the artifact with exactly one backend call.
    ///
    /// # Errors
    ///
    /// Returns whatever the backend returns.
    async fn generate(&self, dialogue: &Dialogue, driver: &dyn RehashDriver) -> RehashResult<String> {
        let prompt = self.build_prompt(dialogue);
        generate_text(driver, self.system_prompt(), &prompt).await
    }
}

/// The [`ContentAgent`] for every built-in [`AgentKind`].
///
/// # Examples
///
/// ```
/// use rehash_agents::{AgentKind, AgentOptions, ContentAgent, FormatAgent};
/// use rehash_core::{Dialogue, Role, Turn};
///
/// let agent = FormatAgent::new(AgentKind::Blog, &AgentOptions::default());
/// let mut dialogue = Dialogue::new();
/// dialogue.push(Turn::new(Role::User, "What is a trait object?"));
///
/// assert_eq!(agent.name(), "blog");
/// assert!(agent.build_prompt(&dialogue).contains("**user:** What is a trait object?"));
/// ```
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FormatAgent {
    /// Which format this agent produces
    kind: AgentKind,
    #[getter(skip)]
    output_file: String,
    #[getter(skip)]
    system_prompt: String,
}

impl FormatAgent {
    /// Build an agent, resolving any per-kind options now.
    pub fn new(kind: AgentKind, options: &AgentOptions) -> Self {
        let template = kind.system_template();
        let system_prompt = match kind {
            AgentKind::Marp => {
                let theme = resolve_marp_theme(options.marp_theme.as_deref());
                template.replace("{theme}", &theme)
            }
            _ => template.to_string(),
        };
        Self {
            kind,
            output_file: kind.output_file(),
            system_prompt,
        }
    }
}

#[async_trait]
impl ContentAgent for FormatAgent {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    fn build_prompt(&self, dialogue: &Dialogue) -> String {
        self.kind.render_prompt(&dialogue.to_prompt())
    }
}
