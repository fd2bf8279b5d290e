//! Transient/permanent classification for the retry wrapper.

use crate::{BackendError, ModelsError, RehashError, RehashErrorKind};

/// Trait for errors that support retry logic.
///
/// Errors answer whether another attempt could succeed. Anything not
/// explicitly transient is treated as permanent.
///
/// # Examples
///
/// ```
/// use rehash_error::{ModelsError, ModelsErrorKind, RehashError, RetryableError};
///
/// let err: RehashError = ModelsError::new(ModelsErrorKind::Api {
///     status: 503,
///     message: "Service unavailable".to_string(),
/// })
/// .into();
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ModelsError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl RetryableError for BackendError {
    fn is_retryable(&self) -> bool {
        self.transient
    }
}

impl RetryableError for RehashError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            RehashErrorKind::Models(e) => e.is_retryable(),
            RehashErrorKind::Backend(e) => e.is_retryable(),
            _ => false,
        }
    }
}
