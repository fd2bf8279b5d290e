//! Top-level error wrapper types.

use crate::{
    AgentError, BackendError, ConfigError, JsonError, ModelsError, StorageError, TranscriptError,
};

/// Every error condition a Rehash operation can surface.
///
/// # Examples
///
/// ```
/// use rehash_error::{BackendError, RehashError, RehashErrorKind};
///
/// let err: RehashError = BackendError::new("Connection failed").into();
/// assert!(format!("{}", err).contains("Backend Error"));
/// assert!(matches!(err.kind(), RehashErrorKind::Backend(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RehashErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Dialogue recovery error
    #[from(TranscriptError)]
    Transcript(TranscriptError),
    /// Agent selection or execution error
    #[from(AgentError)]
    Agent(AgentError),
    /// Artifact persistence error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Rehash error with kind discrimination.
///
/// # Examples
///
/// ```
/// use rehash_error::{RehashResult, ConfigError};
///
/// fn might_fail() -> RehashResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Rehash Error: {}", _0)]
pub struct RehashError(Box<RehashErrorKind>);

impl RehashError {
    /// Create a new error from a kind.
    pub fn new(kind: RehashErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RehashErrorKind {
        &self.0
    }
}

impl<T> From<T> for RehashError
where
    T: Into<RehashErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Rehash operations.
///
/// # Examples
///
/// ```
/// use rehash_error::{RehashResult, JsonError};
///
/// fn encode() -> RehashResult<String> {
///     Err(JsonError::new("key must be a string"))?
/// }
/// ```
pub type RehashResult<T> = std::result::Result<T, RehashError>;
