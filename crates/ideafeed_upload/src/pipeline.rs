//! Upload files, then create the idea.

use crate::UploadQueue;
use ideafeed_core::{LocalFile, NewIdea};
use ideafeed_error::{IdeafeedResult, UploadError, UploadErrorKind};
use ideafeed_interface::{AttachmentApi, IdeaApi};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Sequential upload followed by one creation request.
///
/// Nothing is deleted when a later step fails; files uploaded before the
/// failure stay on the server.
#[derive(Debug)]
pub struct UploadPipeline<A: ?Sized> {
    api: Arc<A>,
}

impl<A: ?Sized> Clone for UploadPipeline<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A> UploadPipeline<A>
where
    A: AttachmentApi + IdeaApi + ?Sized,
{
    /// Pipeline talking to `api`.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Upload `files` in order and create the idea from their keys.
    ///
    /// Returns the creation request that succeeded.
    ///
    /// # Errors
    ///
    /// `UploadFailed`/`MissingKey` for the first file that did not upload
    /// (no creation request is sent), `CreateFailed` when the creation
    /// request itself failed.
    #[instrument(skip_all, fields(files = files.len()))]
    pub async fn submit(
        &self,
        title: String,
        description: String,
        files: Vec<LocalFile>,
    ) -> IdeafeedResult<NewIdea> {
        let mut queue = UploadQueue::new(files);
        let supporting_documents = queue.run(self.api.as_ref()).await?;

        let idea = NewIdea {
            title,
            description,
            supporting_documents,
        };
        self.api.create_idea(&idea).await.map_err(|e| {
            error!(error = %e, "Idea creation failed");
            UploadError::new(UploadErrorKind::CreateFailed(e.to_string()))
        })?;

        info!(attachments = idea.supporting_documents.len(), "Created idea");
        Ok(idea)
    }
}
