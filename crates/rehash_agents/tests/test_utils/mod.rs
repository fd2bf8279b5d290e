//! Test utilities for agent tests.
//!
//! Provides a scriptable backend that records every request.

#![allow(dead_code)]

use async_trait::async_trait;
use rehash_core::{Dialogue, GenerateRequest, GenerateResponse, Role, Turn};
use rehash_error::{BackendError, RehashError, RehashResult};
use rehash_interface::RehashDriver;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always fail with the given message
    Error(String),
    /// Fail N times with a transient error, then succeed with the text
    FailThenSucceed {
        fail_count: usize,
        success_text: String,
    },
}

/// Scriptable backend for orchestrator tests.
///
/// Requests are routed by a marker found in the system prompt; anything
/// unmatched gets the default behavior.
pub struct MockDriver {
    default: MockBehavior,
    routes: Vec<(String, MockBehavior)>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    barrier: Option<Arc<Barrier>>,
    delay: Option<Duration>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given message.
    pub fn new_error(message: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Error(message.into()))
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            default: behavior,
            routes: Vec::new(),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            barrier: None,
            delay: None,
        }
    }

    /// Use `behavior` for requests whose system prompt contains `marker`.
    pub fn route(mut self, marker: impl Into<String>, behavior: MockBehavior) -> Self {
        self.routes.push((marker.into(), behavior));
        self
    }

    /// Hold every call at a barrier before answering.
    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn behavior_for(&self, req: &GenerateRequest) -> &MockBehavior {
        let system = req.system().as_deref().unwrap_or_default();
        self.routes
            .iter()
            .find(|(marker, _)| system.contains(marker.as_str()))
            .map(|(_, behavior)| behavior)
            .unwrap_or(&self.default)
    }

    fn respond(&self, req: &GenerateRequest, call_index: usize) -> RehashResult<GenerateResponse> {
        match self.behavior_for(req) {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(vec![text.clone()])),
            MockBehavior::Error(message) => Err(RehashError::from(BackendError::new(message.clone()))),
            MockBehavior::FailThenSucceed {
                fail_count,
                success_text,
            } => {
                if call_index < *fail_count {
                    Err(RehashError::from(BackendError::transient("temporarily unavailable")))
                } else {
                    Ok(GenerateResponse::new(vec![success_text.clone()]))
                }
            }
        }
    }
}

#[async_trait]
impl RehashDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse> {
        let call_index = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };
        self.requests.lock().unwrap().push(req.clone());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.respond(req, call_index)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A short two-turn dialogue.
pub fn sample_dialogue() -> Dialogue {
    let mut dialogue = Dialogue::new().with_title("Shared ownership");
    dialogue.push(Turn::new(Role::User, "When should I reach for Arc?"));
    dialogue.push(Turn::new(
        Role::Assistant,
        "When several threads need to own the same value.",
    ));
    dialogue
}
