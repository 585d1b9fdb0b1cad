//! Post creation for the Ideafeed client.
//!
//! A post is composed as a [`PostDraft`] whose files each carry a
//! [`PreviewHandle`]. Submitting goes through the [`UploadPipeline`]:
//! files upload one at a time through an [`UploadQueue`], then a single
//! creation request carries their keys in file order. The [`Composer`]
//! ties the draft, the pipeline and user-facing toasts together.

#![warn(missing_docs)]

mod composer;
mod draft;
mod file;
mod pipeline;
mod preview;
mod queue;

pub use composer::Composer;
pub use draft::{DraftFile, PostDraft};
pub use file::read_local_file;
pub use pipeline::UploadPipeline;
pub use preview::{PreviewHandle, PreviewRegistry};
pub use queue::{UploadJob, UploadQueue, UploadStatus};
