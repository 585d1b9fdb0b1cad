//! Core data types for the Ideafeed client.
//!
//! This crate provides the data types shared by the carousel, the upload
//! pipeline and the HTTP client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod file;
mod idea;
mod media;
mod toast;

pub use attachment::{AttachmentKey, ResolvedMedia};
pub use file::{LocalFile, LocalFileBuilder};
pub use idea::{Idea, IdeaId, NewIdea};
pub use media::{MediaKind, content_type_for_path};
pub use toast::{Toast, ToastVariant};
