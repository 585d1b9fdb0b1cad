//! User-facing notifications.

use serde::{Deserialize, Serialize};

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum ToastVariant {
    /// Informational
    #[default]
    Default,
    /// Error styling
    Destructive,
}

/// A short notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Toast {
    /// Headline
    pub title: String,
    /// Detail line
    pub description: String,
    /// Styling
    pub variant: ToastVariant,
}

impl Toast {
    /// Informational toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// Error toast.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    /// Draft is missing a title, description or file.
    pub fn missing_information() -> Self {
        Self::error(
            "Missing information",
            "Please fill in all fields and add at least one file",
        )
    }

    /// Idea created.
    pub fn post_created() -> Self {
        Self::info("Success!", "Your post has been created")
    }

    /// Upload or creation failed.
    pub fn submission_failed() -> Self {
        Self::error("Error", "Failed to submit idea")
    }

    /// One attachment could not be downloaded or decoded.
    pub fn attachment_failed() -> Self {
        Self::error("Error", "Failed to load attachment")
    }

    /// The feed request failed.
    pub fn feed_failed() -> Self {
        Self::error("Error", "Failed to load ideas. Please try again later.")
    }

    /// Whether this toast uses error styling.
    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}
