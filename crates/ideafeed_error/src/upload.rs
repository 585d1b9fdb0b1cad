//! Upload pipeline error types.

/// Kinds of upload pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// One file failed to upload; later files were not attempted
    #[display("Upload of file {} ('{}') failed: {}", index, name, reason)]
    UploadFailed {
        /// Position of the file in the draft
        index: usize,
        /// File name
        name: String,
        /// Failure reason
        reason: String,
    },
    /// Upload response did not carry a storage key
    #[display("Upload of file {} ('{}') returned no key", index, name)]
    MissingKey {
        /// Position of the file in the draft
        index: usize,
        /// File name
        name: String,
    },
    /// Every file uploaded but the idea creation request failed
    #[display("Idea creation failed: {}", _0)]
    CreateFailed(String),
    /// A submission from this draft is already running
    #[display("A submission is already in flight")]
    AlreadyInFlight,
}

/// Upload error with location tracking.
///
/// # Examples
///
/// ```
/// use ideafeed_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::AlreadyInFlight);
/// assert_eq!(err.kind(), &UploadErrorKind::AlreadyInFlight);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    kind: UploadErrorKind,
    line: u32,
    file: &'static str,
}

impl UploadError {
    /// Create a new upload error with caller location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &UploadErrorKind {
        &self.kind
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
