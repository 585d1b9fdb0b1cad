//! Trait definitions for the Ideafeed client.
//!
//! The carousel and the upload pipeline talk to the outside world only
//! through these traits, so they run the same against the HTTP client and
//! against in-memory test doubles.

mod notify;
mod traits;
mod types;

pub use notify::{Notifier, ToastLog, TracingNotifier};
pub use traits::{AttachmentApi, IdeaApi, MediaLoader};
pub use types::LoadedMedia;
