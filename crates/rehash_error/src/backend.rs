//! Backend error types.

/// Failure reported by an upstream generation backend.
///
/// Backends that cannot classify their failures leave `transient` unset, which
/// makes the retry wrapper give up immediately.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", message, line, file)]
pub struct BackendError {
    /// Error message
    pub message: String,
    /// Whether a retry may succeed
    pub transient: bool,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new permanent BackendError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use rehash_error::BackendError;
    ///
    /// let err = BackendError::new("Backend service unavailable");
    /// assert!(err.message.contains("unavailable"));
    /// assert!(!err.transient);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            transient: false,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a BackendError that the retry wrapper may retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use rehash_error::{BackendError, RetryableError};
    ///
    /// let err = BackendError::transient("overloaded");
    /// assert!(err.is_retryable());
    /// ```
    #[track_caller]
    pub fn transient(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            transient: true,
            line: location.line(),
            file: location.file(),
        }
    }
}
