//! Draft validation errors.

use std::fmt;

/// A post draft field that must be filled before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DraftField {
    /// Post title (trimmed, non-empty)
    #[display("title")]
    Title,
    /// Post description (trimmed, non-empty)
    #[display("description")]
    Description,
    /// At least one attached file
    #[display("files")]
    Files,
}

/// Draft rejected before any network call.
///
/// Carries every missing field, in title, description, files order.
///
/// # Examples
///
/// ```
/// use ideafeed_error::{DraftField, ValidationError};
///
/// let err = ValidationError::new(vec![DraftField::Title, DraftField::Files]);
/// assert!(err.is_missing(DraftField::Files));
/// assert!(format!("{}", err).contains("title, files"));
/// ```
#[derive(Debug, Clone, derive_more::Error)]
pub struct ValidationError {
    /// Fields that failed the check
    pub missing: Vec<DraftField>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    #[track_caller]
    pub fn new(missing: Vec<DraftField>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            missing,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the given field is among the missing ones.
    pub fn is_missing(&self, field: DraftField) -> bool {
        self.missing.contains(&field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Validation Error: missing {} at line {} in {}",
            fields, self.line, self.file
        )
    }
}
