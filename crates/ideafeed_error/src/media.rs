//! Attachment media error types.

/// Kinds of media errors.
///
/// Resolution and preload failures are isolated per attachment and never
/// fail the surrounding carousel. Slide range errors are caller bugs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// Attachment URL lookup failed
    #[display("Failed to resolve attachment '{}': {}", key, reason)]
    Resolution {
        /// Attachment key that failed
        key: String,
        /// Failure reason
        reason: String,
    },
    /// Lookup succeeded but carried no URL
    #[display("Attachment '{}' has no URL", _0)]
    MissingUrl(String),
    /// Media download failed
    #[display("Failed to download {}: {}", url, reason)]
    Download {
        /// Media URL
        url: String,
        /// Failure reason
        reason: String,
    },
    /// Media downloaded but did not decode
    #[display("Failed to decode {}: {}", url, reason)]
    Decode {
        /// Media URL
        url: String,
        /// Failure reason
        reason: String,
    },
    /// Slide jump outside `0..=max`
    #[display("Slide {} out of range (max {})", requested, max)]
    SlideOutOfRange {
        /// Requested slide index
        requested: usize,
        /// Largest valid slide index
        max: usize,
    },
}

/// Media error with location tracking.
///
/// # Examples
///
/// ```
/// use ideafeed_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::SlideOutOfRange { requested: 4, max: 2 });
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new media error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediaErrorKind {
        &self.kind
    }
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
