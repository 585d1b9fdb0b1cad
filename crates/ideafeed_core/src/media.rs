//! Media classification.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Broad category of an attachment, taken from the MIME top-level type.
///
/// # Examples
///
/// ```
/// use ideafeed_core::MediaKind;
///
/// assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::Image);
/// assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
/// assert_eq!(MediaKind::from_content_type("application/pdf"), MediaKind::Other);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Audio clip
    Audio,
    /// Anything else (documents, archives)
    Other,
}

impl MediaKind {
    /// Classify a MIME type such as `image/jpeg`.
    pub fn from_content_type(content_type: &str) -> Self {
        let top_level = content_type
            .split('/')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match top_level.as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            _ => Self::Other,
        }
    }
}

/// Guess a MIME type from a file extension.
///
/// Covers the media formats the upload form accepts; anything else is
/// `application/octet-stream`.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
