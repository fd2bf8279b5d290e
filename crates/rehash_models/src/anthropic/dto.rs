//! Anthropic Messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Anthropic message role. The system instruction travels separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnthropicRole {
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// One message in an Anthropic request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role
    role: AnthropicRole,
    /// Message text
    content: String,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Anthropic Messages API request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// System instruction
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// A content block in a response. Only text blocks carry output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Generated text
    Text {
        /// The text
        text: String,
    },
    /// Any block type this client does not use
    #[serde(other)]
    Other,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens consumed
    #[serde(default)]
    input_tokens: u64,
    /// Output tokens generated
    #[serde(default)]
    output_tokens: u64,
}

/// Anthropic Messages API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response blocks in order
    content: Vec<AnthropicContentBlock>,
    /// Model that answered
    #[serde(default)]
    model: Option<String>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
    /// Token usage
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct AnthropicErrorBody {
    /// Error details
    error: AnthropicErrorDetail,
}

/// Error details inside [`AnthropicErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct AnthropicErrorDetail {
    /// Error category, e.g. `overloaded_error`
    #[serde(rename = "type")]
    kind: String,
    /// Human-readable message
    message: String,
}
