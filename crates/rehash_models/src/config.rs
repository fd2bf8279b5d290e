//! Layered configuration for Rehash.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from rehash.toml)
//! - `~/.config/rehash/rehash.toml`
//! - `./rehash.toml`
//! - `REHASH_<SECTION>__<KEY>` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use rehash_error::{ConfigError, RehashResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../rehash.toml");

/// Backend model settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Provider name; only `anthropic` is built in
    pub provider: String,
    /// Model identifier
    pub name: String,
    /// Maximum tokens per generation
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Total calls per request, including the first
    pub max_attempts: usize,
    /// Delay before the first retry, in milliseconds
    pub initial_backoff_ms: u64,
    /// Endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            name: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            max_attempts: 3,
            initial_backoff_ms: 1000,
            base_url: None,
        }
    }
}

/// Generation run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Directory artifacts are written to
    pub output_dir: PathBuf,
    /// Agents to run when none are named on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,
    /// Marp theme (CSS path or theme name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marp_theme: Option<String>,
    /// Per-run timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./output"),
            agents: None,
            marp_theme: None,
            timeout_secs: None,
        }
    }
}

/// Top-level Rehash configuration.
///
/// # Example
///
/// ```no_run
/// use rehash_models::RehashConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RehashConfig::load()?;
/// println!("Model: {}", config.model.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RehashConfig {
    /// Backend model settings
    pub model: ModelConfig,
    /// Generation run settings
    pub generation: GenerationConfig,
}

impl RehashConfig {
    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not deserialize.
    pub fn bundled() -> RehashResult<Self> {
        finish(base_builder(), "bundled defaults")
    }

    /// Load bundled defaults overlaid with one explicit file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> RehashResult<Self> {
        debug!("Loading configuration from file");
        let path = path.as_ref();
        let builder = base_builder()
            .add_source(File::from(path))
            .add_source(environment());
        finish(builder, &path.display().to_string())
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file or variable fails to parse.
    #[instrument]
    pub fn load() -> RehashResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = base_builder();
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/rehash/rehash.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }
        builder = builder
            .add_source(File::with_name("rehash").required(false))
            .add_source(environment());

        finish(builder, "layered sources")
    }
}

fn base_builder() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn environment() -> Environment {
    Environment::with_prefix("REHASH")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>, origin: &str) -> RehashResult<RehashConfig> {
    let config = builder
        .build()
        .map_err(|e| {
            ConfigError::new(format!("Failed to build configuration: {}", e)).with_source_path(origin)
        })?
        .try_deserialize()
        .map_err(|e| {
            ConfigError::new(format!("Failed to parse configuration: {}", e)).with_source_path(origin)
        })?;
    Ok(config)
}
