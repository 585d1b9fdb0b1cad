//! Ordered, one-at-a-time upload queue.

use derive_getters::Getters;
use ideafeed_core::{AttachmentKey, LocalFile};
use ideafeed_error::{UploadError, UploadErrorKind, UploadResult};
use ideafeed_interface::AttachmentApi;
use tracing::{debug, error, info};

/// Progress of one upload job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum UploadStatus {
    /// Not started
    #[default]
    Pending,
    /// Request in flight
    Uploading,
    /// Uploaded; the key is known
    Done,
    /// Upload failed
    Failed,
}

/// One file of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UploadJob {
    /// File to upload
    file: LocalFile,
    /// Current progress
    status: UploadStatus,
    /// Storage key once uploaded
    result_key: Option<AttachmentKey>,
}

impl UploadJob {
    fn new(file: LocalFile) -> Self {
        Self {
            file,
            status: UploadStatus::Pending,
            result_key: None,
        }
    }
}

/// The jobs of one submission, fixed when the queue is built.
///
/// [`run`](Self::run) is the only executor and keeps at most one job in
/// flight. The first failure stops the queue; later jobs stay `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadQueue {
    jobs: Vec<UploadJob>,
}

impl UploadQueue {
    /// Queue one job per file, in order.
    pub fn new(files: impl IntoIterator<Item = LocalFile>) -> Self {
        Self {
            jobs: files.into_iter().map(UploadJob::new).collect(),
        }
    }

    /// Jobs in upload order.
    pub fn jobs(&self) -> &[UploadJob] {
        &self.jobs
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the queue has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Keys of finished jobs, in order.
    pub fn keys(&self) -> Vec<AttachmentKey> {
        self.jobs
            .iter()
            .filter_map(|job| job.result_key.clone())
            .collect()
    }

    /// Upload every pending job in order, awaiting each before the next.
    ///
    /// # Errors
    ///
    /// Stops at the first job that fails or comes back without a key.
    pub async fn run<A>(&mut self, api: &A) -> UploadResult<Vec<AttachmentKey>>
    where
        A: AttachmentApi + ?Sized,
    {
        for (index, job) in self.jobs.iter_mut().enumerate() {
            if job.status == UploadStatus::Done {
                continue;
            }

            job.status = UploadStatus::Uploading;
            debug!(index, file = %job.file.name(), size = job.file.size(), "Uploading file");

            match api.upload_file(&job.file).await {
                Ok(Some(key)) => {
                    info!(index, file = %job.file.name(), key = %key, "Uploaded file");
                    job.result_key = Some(key);
                    job.status = UploadStatus::Done;
                }
                Ok(None) => {
                    error!(index, file = %job.file.name(), "Upload returned no key");
                    job.status = UploadStatus::Failed;
                    return Err(UploadError::new(UploadErrorKind::MissingKey {
                        index,
                        name: job.file.name().clone(),
                    }));
                }
                Err(e) => {
                    error!(index, file = %job.file.name(), error = %e, "Upload failed");
                    job.status = UploadStatus::Failed;
                    return Err(UploadError::new(UploadErrorKind::UploadFailed {
                        index,
                        name: job.file.name().clone(),
                        reason: e.to_string(),
                    }));
                }
            }
        }

        Ok(self.keys())
    }
}
