//! Trait definitions for the backend endpoints and media fetching.

use crate::LoadedMedia;
use async_trait::async_trait;
use ideafeed_core::{AttachmentKey, Idea, LocalFile, NewIdea};
use ideafeed_error::IdeafeedResult;

/// File storage endpoints.
#[async_trait]
pub trait AttachmentApi: Send + Sync {
    /// Look up the display URL of a stored file (`GET /files/{key}`).
    ///
    /// `Ok(None)` means the server answered without a URL.
    async fn file_url(&self, key: &AttachmentKey) -> IdeafeedResult<Option<String>>;

    /// Upload one file (`POST /files/upload`, multipart field `file`).
    ///
    /// `Ok(None)` means the server answered without a storage key.
    async fn upload_file(&self, file: &LocalFile) -> IdeafeedResult<Option<AttachmentKey>>;
}

/// Idea endpoints.
#[async_trait]
pub trait IdeaApi: Send + Sync {
    /// Create an idea (`POST /ideas`).
    async fn create_idea(&self, idea: &NewIdea) -> IdeafeedResult<()>;

    /// Ideas relevant to the signed-in user (`GET /ideas/related`).
    async fn related_ideas(&self) -> IdeafeedResult<Vec<Idea>>;
}

/// Fetches and decodes attachment media ahead of display.
#[async_trait]
pub trait MediaLoader: Send + Sync {
    /// Download the media behind `url` and confirm it decodes.
    async fn load(&self, url: &str) -> IdeafeedResult<LoadedMedia>;
}
