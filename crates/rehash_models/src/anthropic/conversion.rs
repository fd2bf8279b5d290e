//! Conversion between Rehash requests and Anthropic DTOs.

use super::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicRole};
use rehash_core::{GenerateRequest, GenerateResponse, Role};
use rehash_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Defaults applied where a request leaves a field unset.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Convert a generic request into an Anthropic request body.
///
/// # Errors
///
/// Returns [`ModelsErrorKind::Conversion`] when the request has no messages or
/// carries a system-role message (the instruction belongs in `system`).
pub fn to_anthropic_request(
    req: &GenerateRequest,
    defaults: &RequestDefaults<'_>,
) -> ModelsResult<AnthropicRequest> {
    if req.messages().is_empty() {
        return Err(ModelsError::new(ModelsErrorKind::Conversion(
            "request has no messages".to_string(),
        )));
    }

    let messages = req
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role {
                Role::User => AnthropicRole::User,
                Role::Assistant => AnthropicRole::Assistant,
                Role::System => {
                    return Err(ModelsError::new(ModelsErrorKind::Conversion(
                        "system messages must be sent as the system instruction".to_string(),
                    )));
                }
            };
            AnthropicMessage::builder()
                .role(role)
                .content(msg.content.clone())
                .build()
                .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
        })
        .collect::<ModelsResult<Vec<_>>>()?;

    AnthropicRequest::builder()
        .model(req.model().clone().unwrap_or_else(|| defaults.model.to_string()))
        .max_tokens(req.max_tokens().unwrap_or(defaults.max_tokens))
        .system(req.system().clone())
        .messages(messages)
        .temperature(Some(req.temperature().unwrap_or(defaults.temperature)))
        .build()
        .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
}

/// Keep the text blocks of a response, in order.
pub fn from_anthropic_response(resp: &AnthropicResponse) -> GenerateResponse {
    let outputs = resp
        .content()
        .iter()
        .filter_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text.clone()),
            AnthropicContentBlock::Other => None,
        })
        .collect();
    GenerateResponse::new(outputs)
}
