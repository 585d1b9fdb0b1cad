//! Draft editing and submission with user feedback.

use crate::{PostDraft, PreviewRegistry, UploadPipeline};
use ideafeed_core::{NewIdea, Toast};
use ideafeed_error::{IdeafeedResult, UploadError, UploadErrorKind};
use ideafeed_interface::{AttachmentApi, IdeaApi, Notifier};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, warn};

/// Owns the post draft and submits it.
///
/// At most one submission runs at a time. The draft lock is never held
/// across an await, so the draft stays editable while uploads run.
pub struct Composer<A: ?Sized> {
    draft: Mutex<PostDraft>,
    previews: Arc<PreviewRegistry>,
    pipeline: UploadPipeline<A>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicBool,
}

impl<A> Composer<A>
where
    A: AttachmentApi + IdeaApi + ?Sized,
{
    /// Composer with an empty draft.
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        let previews = PreviewRegistry::new();
        Self {
            draft: Mutex::new(PostDraft::new(Arc::clone(&previews))),
            previews,
            pipeline: UploadPipeline::new(api),
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Edit the draft.
    pub fn edit<R>(&self, f: impl FnOnce(&mut PostDraft) -> R) -> R {
        f(&mut self.draft.lock())
    }

    /// Read the draft.
    pub fn inspect<R>(&self, f: impl FnOnce(&PostDraft) -> R) -> R {
        f(&self.draft.lock())
    }

    /// Registry holding the draft's previews.
    pub fn previews(&self) -> &Arc<PreviewRegistry> {
        &self.previews
    }

    /// Whether a submission is running.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit the draft.
    ///
    /// An incomplete draft is rejected with a "Missing information" toast
    /// and no network call. On success the draft is cleared and a success
    /// toast shown; on failure the draft is left as it was and one error
    /// toast shown.
    ///
    /// # Errors
    ///
    /// `AlreadyInFlight` while another submission runs, the validation
    /// error for an incomplete draft, or the pipeline error.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> IdeafeedResult<NewIdea> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            debug!("Submission already in flight");
            return Err(UploadError::new(UploadErrorKind::AlreadyInFlight).into());
        };

        let snapshot = {
            let draft = self.draft.lock();
            draft.validate().map(|()| draft.snapshot())
        };
        let (title, description, files) = match snapshot {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Draft incomplete");
                self.notifier.notify(Toast::missing_information());
                return Err(e.into());
            }
        };

        match self.pipeline.submit(title, description, files).await {
            Ok(idea) => {
                self.draft.lock().clear();
                self.notifier.notify(Toast::post_created());
                Ok(idea)
            }
            Err(e) => {
                self.notifier.notify(Toast::submission_failed());
                Err(e)
            }
        }
    }
}

/// Clears the in-flight flag when the submission ends or is cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
