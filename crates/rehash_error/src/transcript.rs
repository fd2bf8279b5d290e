//! Dialogue recovery error types.

/// Specific error conditions while recovering a dialogue from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TranscriptErrorKind {
    /// The input could not be read at all
    #[display("Failed to read transcript {}: {}", path, message)]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Neither the structured nor the line-oriented syntax produced a dialogue
    #[display("Malformed transcript: {}", _0)]
    Malformed(String),
}

/// Error type for dialogue recovery.
///
/// # Examples
///
/// ```
/// use rehash_error::{TranscriptError, TranscriptErrorKind};
///
/// let err = TranscriptError::new(TranscriptErrorKind::Malformed("no turns".into()));
/// assert!(format!("{}", err).contains("no turns"));
/// assert!(err.is_malformed());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transcript Error: {} at line {} in {}", kind, line, file)]
pub struct TranscriptError {
    /// The specific error condition
    pub kind: TranscriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TranscriptError {
    /// Create a new TranscriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TranscriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the input was readable but unrecognisable.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, TranscriptErrorKind::Malformed(_))
    }

    /// True when the input could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, TranscriptErrorKind::Io { .. })
    }
}
