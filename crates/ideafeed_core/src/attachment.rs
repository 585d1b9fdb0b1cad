//! Attachment keys and their resolved display URLs.

use serde::{Deserialize, Serialize};

/// Opaque, server-issued key identifying a stored file.
///
/// # Examples
///
/// ```
/// use ideafeed_core::AttachmentKey;
///
/// let key = AttachmentKey::from("uploads/3f2a.png");
/// assert_eq!(key.as_str(), "uploads/3f2a.png");
/// assert_eq!(format!("{}", key), "uploads/3f2a.png");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct AttachmentKey(String);

impl AttachmentKey {
    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttachmentKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One attachment with the URL it is displayed from.
///
/// `url` stays `None` until resolution finishes. Once resolved it is either
/// the server-provided URL or a placeholder derived from the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedMedia {
    /// Attachment key
    pub key: AttachmentKey,
    /// Display URL, once resolved
    pub url: Option<String>,
    /// Whether `url` is the fallback placeholder
    #[serde(default)]
    pub placeholder: bool,
}

impl ResolvedMedia {
    /// An entry whose resolution has not finished.
    pub fn pending(key: AttachmentKey) -> Self {
        Self {
            key,
            url: None,
            placeholder: false,
        }
    }

    /// An entry resolved to the server-provided URL.
    pub fn resolved(key: AttachmentKey, url: impl Into<String>) -> Self {
        Self {
            key,
            url: Some(url.into()),
            placeholder: false,
        }
    }

    /// An entry that fell back to a placeholder URL.
    pub fn fallback(key: AttachmentKey, url: impl Into<String>) -> Self {
        Self {
            key,
            url: Some(url.into()),
            placeholder: true,
        }
    }
}
