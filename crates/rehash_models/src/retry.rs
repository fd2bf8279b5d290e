//! Retry wrapper for any backend.

use async_trait::async_trait;
use rehash_core::{GenerateRequest, GenerateResponse};
use rehash_error::{RehashResult, RetryableError};
use rehash_interface::RehashDriver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialFactorBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

const DEFAULT_BACKOFF_MS: u64 = 1000;
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

/// Wraps a backend and retries transient failures with exponential backoff.
///
/// Errors are classified through [`RetryableError`]; permanent errors return
/// immediately. After the last attempt the last error is returned.
///
/// # Examples
///
/// ```
/// use rehash_models::{AnthropicClient, RetryingDriver};
/// use rehash_interface::RehashDriver;
///
/// let client = AnthropicClient::new("sk-test", "claude-sonnet-4-20250514");
/// let driver = RetryingDriver::new(client, 3);
/// assert_eq!(driver.max_attempts(), 3);
/// assert_eq!(driver.provider_name(), "anthropic");
/// ```
#[derive(Debug, Clone)]
pub struct RetryingDriver<D> {
    inner: D,
    max_attempts: usize,
    initial_backoff_ms: u64,
    max_delay: Duration,
}

impl<D: RehashDriver> RetryingDriver<D> {
    /// Wrap `inner`, allowing up to `max_attempts` calls per request.
    ///
    /// Zero is treated as one attempt.
    pub fn new(inner: D, max_attempts: usize) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            initial_backoff_ms: DEFAULT_BACKOFF_MS,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }

    /// Set the initial backoff delay.
    pub fn with_initial_backoff(mut self, initial: Duration) -> Self {
        self.initial_backoff_ms = u64::try_from(initial.as_millis()).unwrap_or(u64::MAX).max(1);
        self
    }

    /// Cap the delay between attempts.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Total calls allowed per request.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Delays between attempts before jitter: the initial backoff, doubling
    /// up to the cap, one entry per retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use rehash_models::{AnthropicClient, RetryingDriver};
    /// use std::time::Duration;
    ///
    /// let client = AnthropicClient::new("sk-test", "claude-sonnet-4-20250514");
    /// let driver = RetryingDriver::new(client, 4).with_initial_backoff(Duration::from_millis(500));
    /// let delays: Vec<_> = driver.backoff_schedule().collect();
    /// assert_eq!(
    ///     delays,
    ///     [Duration::from_millis(500), Duration::from_secs(1), Duration::from_secs(2)]
    /// );
    /// ```
    pub fn backoff_schedule(&self) -> impl Iterator<Item = Duration> {
        ExponentialFactorBackoff::from_millis(self.initial_backoff_ms, 2.0)
            .max_delay(self.max_delay)
            .take(self.max_attempts - 1)
    }
}

#[async_trait]
impl<D: RehashDriver> RehashDriver for RetryingDriver<D> {
    #[instrument(skip(self, req), fields(provider = self.inner.provider_name(), max_attempts = self.max_attempts))]
    async fn generate(&self, req: &GenerateRequest) -> RehashResult<GenerateResponse> {
        let retry_strategy = self.backoff_schedule().map(jitter);

        let inner = &self.inner;
        let attempts = AtomicUsize::new(0);
        let attempts_ref = &attempts;
        let max_attempts = self.max_attempts;

        let result = Retry::spawn(retry_strategy, move || async move {
            let attempt = attempts_ref.fetch_add(1, Ordering::SeqCst) + 1;
            match inner.generate(req).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(attempt, max_attempts, error = %e, "Transient backend error, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    if e.is_retryable() {
                        warn!(attempt, error = %e, "Retries exhausted");
                    } else {
                        warn!(attempt, error = %e, "Permanent backend error, failing immediately");
                    }
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await;

        debug!(
            attempts = attempts.load(Ordering::SeqCst),
            success = result.is_ok(),
            "Backend call finished"
        );
        result
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
