//! Trait definitions for LLM backends.

use async_trait::async_trait;
use rehash_core::{GenerateRequest, GenerateResponse};
use rehash_error::RehashResult;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Core trait that all LLM backends must implement.
///
/// Implementations must tolerate concurrent calls: one handle is shared by
/// every agent in a run.
#[async_trait]
pub trait RehashDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: RehashDriver + ?Sized> RehashDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Send one system instruction and one user prompt, returning the text reply.
///
/// This is the only shape of call the generation agents make.
#[instrument(skip_all, fields(provider = driver.provider_name(), prompt_len = prompt.len()))]
pub async fn generate_text(
    driver: &dyn RehashDriver,
    system: &str,
    prompt: &str,
) -> RehashResult<String> {
    let request = GenerateRequest::single_turn(system, prompt);
    let response = driver.generate(&request).await?;
    let text = response.text();
    debug!(response_len = text.len(), "Backend returned text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehash_core::Role;

    struct EchoDriver;

    #[async_trait]
    impl RehashDriver for EchoDriver {
        async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse> {
            let system = req.system().clone().unwrap_or_default();
            let user = req
                .messages()
                .iter()
                .filter(|m| m.role == Role::User)
                .map(|m| m.content.clone())
                .collect::<Vec<_>>();
            Ok(GenerateResponse::new(vec![system, "|".into(), user.concat()]))
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }

        fn model_name(&self) -> &str {
            "echo-1"
        }
    }

    #[tokio::test]
    async fn generate_text_sends_system_and_single_user_message() {
        let text = generate_text(&EchoDriver, "persona", "prompt").await.unwrap();
        assert_eq!(text, "persona|prompt");
    }

    #[tokio::test]
    async fn arc_driver_delegates() {
        let driver: Arc<dyn RehashDriver> = Arc::new(EchoDriver);
        assert_eq!(driver.model_name(), "echo-1");
        let text = generate_text(&driver, "a", "b").await.unwrap();
        assert_eq!(text, "a|b");
    }
}
