//! Request and response types for LLM generation.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message sent to the backend.
///
/// # Examples
///
/// ```
/// use rehash_core::{Message, MessageBuilder, Role};
///
/// let message = MessageBuilder::default()
///     .role(Role::User)
///     .content("Hello!")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the message
    pub content: String,
}

/// Generic generation request.
///
/// `system` carries the fixed instruction (persona) for the call; `messages`
/// carry the conversation the model should answer.
///
/// # Examples
///
/// ```
/// use rehash_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .system(Some("You write release notes.".to_string()))
///     .messages(vec![Message { role: Role::User, content: "v1.2 changes".into() }])
///     .max_tokens(Some(512))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(512));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(default, setter(into))]
pub struct GenerateRequest {
    /// Fixed system instruction
    system: Option<String>,
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    temperature: Option<f32>,
    /// Model identifier override
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// A request with one system instruction and one user message.
    pub fn single_turn(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            messages: vec![Message {
                role: Role::User,
                content: prompt.into(),
            }],
            ..Default::default()
        }
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use rehash_core::GenerateResponse;
///
/// let response = GenerateResponse::new(vec!["Hello".into(), ", world".into()]);
/// assert_eq!(response.text(), "Hello, world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Text blocks returned by the model, in order
    outputs: Vec<String>,
}

impl GenerateResponse {
    /// Wrap the model's text blocks.
    pub fn new(outputs: Vec<String>) -> Self {
        Self { outputs }
    }

    /// All text blocks concatenated.
    pub fn text(&self) -> String {
        self.outputs.concat()
    }
}
