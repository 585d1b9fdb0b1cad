//! Local file errors.

/// Kinds of local file errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LocalFileErrorKind {
    /// Failed to read file
    #[display("Failed to read file {}: {}", path, reason)]
    Read {
        /// Path that failed
        path: String,
        /// Failure reason
        reason: String,
    },
    /// Path has no usable file name
    #[display("Invalid file path: {}", _0)]
    InvalidPath(String),
}

/// Local file error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Local File Error: {} at line {} in {}", kind, line, file)]
pub struct LocalFileError {
    /// The kind of error that occurred
    pub kind: LocalFileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LocalFileError {
    /// Create a new local file error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LocalFileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
