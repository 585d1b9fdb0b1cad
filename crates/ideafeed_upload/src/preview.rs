//! Client-side preview URLs for files in a draft.

use ideafeed_core::{LocalFile, MediaKind};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};
use uuid::Uuid;

const OBJECT_URL_PREFIX: &str = "blob:ideafeed/";

/// Tracks which preview URLs are live.
///
/// URLs are created by [`PreviewRegistry::create`] and revoked when their
/// [`PreviewHandle`] drops.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: Mutex<HashSet<String>>,
    revoked: AtomicUsize,
}

impl PreviewRegistry {
    /// Shared, empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a preview for `file`.
    pub fn create(self: &Arc<Self>, file: &LocalFile) -> PreviewHandle {
        let url = format!("{}{}", OBJECT_URL_PREFIX, Uuid::new_v4());
        self.live.lock().insert(url.clone());
        debug!(url = %url, file = %file.name(), "Created preview");

        PreviewHandle {
            url,
            kind: file.kind(),
            label: format!("{} ({})", file.name(), file.size_label()),
            registry: Arc::clone(self),
        }
    }

    /// Whether `url` was created here and not yet revoked.
    pub fn is_live(&self, url: &str) -> bool {
        self.live.lock().contains(url)
    }

    /// Number of previews currently live.
    pub fn live_count(&self) -> usize {
        self.live.lock().len()
    }

    /// Number of previews revoked so far.
    pub fn revoked_count(&self) -> usize {
        self.revoked.load(Ordering::SeqCst)
    }

    fn revoke(&self, url: &str) {
        if self.live.lock().remove(url) {
            self.revoked.fetch_add(1, Ordering::SeqCst);
            debug!(url = %url, "Revoked preview");
        } else {
            warn!(url = %url, "Preview revoked twice");
        }
    }
}

/// A live preview URL, revoked when dropped.
///
/// # Examples
///
/// ```
/// use ideafeed_core::LocalFile;
/// use ideafeed_upload::PreviewRegistry;
///
/// let registry = PreviewRegistry::new();
/// let file = LocalFile::builder()
///     .name("cat.png")
///     .content_type("image/png")
///     .bytes(vec![1, 2, 3])
///     .build()
///     .unwrap();
///
/// let preview = registry.create(&file);
/// assert!(preview.url().starts_with("blob:ideafeed/"));
/// assert!(registry.is_live(preview.url()));
///
/// drop(preview);
/// assert_eq!(registry.live_count(), 0);
/// assert_eq!(registry.revoked_count(), 1);
/// ```
#[derive(Debug)]
pub struct PreviewHandle {
    url: String,
    kind: MediaKind,
    label: String,
    registry: Arc<PreviewRegistry>,
}

impl PreviewHandle {
    /// Object URL the preview renders from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Which preview to render.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Name and size, shown for files without a media preview.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}
