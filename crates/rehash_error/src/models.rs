//! Model provider errors.

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// API key environment variable is not set
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),

    /// Request never reached the provider (connect, TLS, timeout)
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body was not the expected shape
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// Request could not be converted to the provider's format
    #[display("Conversion error: {}", _0)]
    Conversion(String),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),

    /// Provider name in configuration is not supported
    #[display("Unsupported provider: {}", _0)]
    UnsupportedProvider(String),
}

impl ModelsErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModelsErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504 | 529)
            }
            ModelsErrorKind::Http(_) => true,
            _ => false,
        }
    }
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use rehash_error::{ModelsError, ModelsErrorKind, RetryableError};
///
/// let err = ModelsError::new(ModelsErrorKind::Api {
///     status: 529,
///     message: "overloaded".into(),
/// });
/// assert!(err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
