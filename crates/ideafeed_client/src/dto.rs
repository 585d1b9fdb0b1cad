//! Wire envelopes for the backend responses.
//!
//! Every endpoint wraps its payload in `{ "data": ... }`.

use ideafeed_core::{AttachmentKey, Idea};
use serde::Deserialize;

/// `{ "data": T }`, tolerating a missing or null `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: Option<T>,
}

/// Payload of `GET /files/{key}`.
#[derive(Debug, Deserialize)]
pub(crate) struct FileUrlData {
    #[serde(default)]
    pub(crate) url: Option<String>,
}

/// Payload of `POST /files/upload`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadData {
    #[serde(default)]
    pub(crate) key: Option<AttachmentKey>,
}

pub(crate) type FileUrlResponse = Envelope<FileUrlData>;
pub(crate) type UploadResponse = Envelope<UploadData>;
pub(crate) type IdeasResponse = Envelope<Vec<Idea>>;
