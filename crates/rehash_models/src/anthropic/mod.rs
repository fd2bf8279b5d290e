//! Anthropic Claude integration.

mod client;
mod conversion;
mod dto;

pub use client::{ANTHROPIC_API_URL, AnthropicClient};
pub use conversion::{RequestDefaults, from_anthropic_response, to_anthropic_request};
pub use dto::{
    AnthropicContentBlock, AnthropicErrorBody, AnthropicErrorDetail, AnthropicMessage,
    AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicRole, AnthropicUsage,
};
