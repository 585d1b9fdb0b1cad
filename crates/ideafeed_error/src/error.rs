//! Top-level error wrapper types.

use crate::{
    ConfigError, HttpError, JsonError, LocalFileError, MediaError, UploadError, ValidationError,
};

/// Every error condition the Ideafeed crates can surface.
///
/// # Examples
///
/// ```
/// use ideafeed_error::{HttpError, IdeafeedError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: IdeafeedError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum IdeafeedErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Draft failed submission checks
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Attachment resolution, preload or carousel error
    #[from(MediaError)]
    Media(MediaError),
    /// Upload pipeline error
    #[from(UploadError)]
    Upload(UploadError),
    /// Local file could not be read
    #[from(LocalFileError)]
    LocalFile(LocalFileError),
}

/// Ideafeed error with kind discrimination.
///
/// # Examples
///
/// ```
/// use ideafeed_error::{ConfigError, IdeafeedResult};
///
/// fn might_fail() -> IdeafeedResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Ideafeed Error: {}", _0)]
pub struct IdeafeedError(Box<IdeafeedErrorKind>);

impl IdeafeedError {
    /// Create a new error from a kind.
    pub fn new(kind: IdeafeedErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IdeafeedErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to IdeafeedErrorKind
impl<T> From<T> for IdeafeedError
where
    T: Into<IdeafeedErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Ideafeed operations.
pub type IdeafeedResult<T> = std::result::Result<T, IdeafeedError>;
