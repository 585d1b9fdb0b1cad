//! Local files selected for upload.

use crate::MediaKind;
use derive_getters::Getters;

/// A file picked by the user, held in memory until it is uploaded.
///
/// # Examples
///
/// ```
/// use ideafeed_core::{LocalFile, MediaKind};
///
/// let file = LocalFile::builder()
///     .name("notes.pdf")
///     .content_type("application/pdf")
///     .bytes(vec![0u8; 1_572_864])
///     .build()
///     .unwrap();
///
/// assert_eq!(file.kind(), MediaKind::Other);
/// assert_eq!(file.size_label(), "1.50 MB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct LocalFile {
    /// File name shown in previews and sent as the multipart file name
    name: String,
    /// MIME type
    #[builder(default = "String::from(\"application/octet-stream\")")]
    content_type: String,
    /// File contents
    bytes: Vec<u8>,
}

impl LocalFile {
    /// Creates a new builder for `LocalFile`.
    pub fn builder() -> LocalFileBuilder {
        LocalFileBuilder::default()
    }

    /// Media category used to pick a preview.
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_content_type(&self.content_type)
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Size in megabytes with two decimals, as shown under generic previews.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / (1024.0 * 1024.0))
    }
}
