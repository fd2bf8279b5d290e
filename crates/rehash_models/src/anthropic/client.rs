//! Anthropic Messages API client.

use super::conversion::{self, RequestDefaults};
use super::{AnthropicErrorBody, AnthropicResponse};
use crate::ModelConfig;
use async_trait::async_trait;
use rehash_core::{GenerateRequest, GenerateResponse};
use rehash_error::{ModelsError, ModelsErrorKind, ModelsResult, RehashResult};
use rehash_interface::RehashDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default Messages API endpoint.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl AnthropicClient {
    /// Creates a client with an explicit API key and the default endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: ANTHROPIC_API_URL.to_string(),
            model: model.into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// Creates a client from model configuration, reading the API key from
    /// the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider is not `anthropic`
    /// - The API key variable is unset or empty
    #[instrument(skip_all, fields(provider = %config.provider, model = %config.name))]
    pub fn from_config(config: &ModelConfig) -> ModelsResult<Self> {
        if !config.provider.eq_ignore_ascii_case("anthropic") {
            return Err(ModelsError::new(ModelsErrorKind::UnsupportedProvider(
                config.provider.clone(),
            )));
        }

        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ModelsError::new(ModelsErrorKind::MissingApiKey(config.api_key_env.clone()))
            })?;

        let mut client = Self::new(api_key, config.name.clone())
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature);
        if let Some(url) = &config.base_url {
            client = client.with_base_url(url.clone());
        }
        debug!("Anthropic client configured");
        Ok(client)
    }

    /// Override the endpoint URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Default maximum tokens for requests that do not set one.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Default temperature for requests that do not set one.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    async fn generate_internal(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        let defaults = RequestDefaults {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        let body = conversion::to_anthropic_request(req, &defaults)?;

        debug!(url = %self.base_url, model = %body.model(), "Sending Anthropic API request");
        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Anthropic request failed");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicErrorBody>(&text)
                .map(|body| body.error().message().clone())
                .unwrap_or(text);
            error!(status = status.as_u16(), message = %message, "Anthropic API error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: AnthropicResponse = response.json().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;
        debug!(
            blocks = parsed.content().len(),
            stop_reason = ?parsed.stop_reason(),
            "Anthropic response received"
        );
        Ok(conversion::from_anthropic_response(&parsed))
    }
}

#[async_trait]
impl RehashDriver for AnthropicClient {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse> {
        Ok(self.generate_internal(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
