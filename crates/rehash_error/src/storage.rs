//! Artifact persistence errors.

/// What went wrong while persisting generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// The output directory could not be created
    #[display("Failed to create output directory {}: {}", path, message)]
    DirectoryCreation {
        /// Directory path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// An artifact or summary could not be written
    #[display("Failed to write {}: {}", path, message)]
    FileWrite {
        /// File path
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use rehash_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileWrite {
///     path: "out/blog.md".into(),
///     message: "disk full".into(),
/// });
/// assert!(format!("{}", err).contains("out/blog.md"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
