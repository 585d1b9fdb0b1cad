//! Attachment preload tracking.

use futures::{FutureExt, future::BoxFuture, stream::FuturesUnordered};
use ideafeed_core::ResolvedMedia;
use ideafeed_error::{IdeafeedResult, MediaError, MediaErrorKind};
use ideafeed_interface::{LoadedMedia, MediaLoader};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which attachments of one mounted post finished preloading.
///
/// Keyed by attachment index (`0..N`), not slide index. Entries only ever
/// move from unsettled to loaded or failed; only [`reset`](Self::reset)
/// clears them.
///
/// # Examples
///
/// ```
/// use ideafeed_carousel::PreloadCache;
///
/// let mut cache = PreloadCache::new(2);
/// assert!(cache.mark_loaded(0));
/// assert!(!cache.mark_loaded(0));
/// assert!(!cache.all_settled());
///
/// cache.mark_failed(1);
/// assert!(cache.all_settled());
/// assert!(!cache.is_loaded(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadCache {
    expected: usize,
    loaded: BTreeSet<usize>,
    failed: BTreeSet<usize>,
}

impl PreloadCache {
    /// Empty cache for `expected` attachments.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            loaded: BTreeSet::new(),
            failed: BTreeSet::new(),
        }
    }

    /// Forget everything; used when the attachment list changes identity.
    pub fn reset(&mut self, expected: usize) {
        debug!(expected, previously_loaded = self.loaded.len(), "Resetting preload cache");
        *self = Self::new(expected);
    }

    /// Record a confirmed decode. Returns `true` the first time only.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        if index >= self.expected {
            warn!(index, expected = self.expected, "Ignoring preload for unknown attachment");
            return false;
        }
        let inserted = self.loaded.insert(index);
        if inserted {
            self.failed.remove(&index);
        }
        inserted
    }

    /// Record a failed download or decode. Loaded entries stay loaded.
    pub fn mark_failed(&mut self, index: usize) -> bool {
        if index >= self.expected || self.loaded.contains(&index) {
            return false;
        }
        self.failed.insert(index)
    }

    /// Whether attachment `index` is ready to display.
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    /// Whether attachment `index` failed to preload.
    pub fn is_failed(&self, index: usize) -> bool {
        self.failed.contains(&index)
    }

    /// Whether attachment `index` finished preloading either way.
    pub fn is_settled(&self, index: usize) -> bool {
        self.is_loaded(index) || self.is_failed(index)
    }

    /// Whether attachment `index` still needs a fetch. Loaded entries never refetch.
    pub fn needs_fetch(&self, index: usize) -> bool {
        index < self.expected && !self.is_settled(index)
    }

    /// Whether every attachment settled.
    pub fn all_settled(&self) -> bool {
        self.loaded.len() + self.failed.len() >= self.expected
    }

    /// Number of attachments tracked.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Loaded attachment indices in ascending order.
    pub fn loaded(&self) -> impl Iterator<Item = usize> + '_ {
        self.loaded.iter().copied()
    }

    /// Number of loaded attachments.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}

/// Result of preloading one attachment.
#[derive(Debug)]
pub struct PreloadOutcome {
    /// Attachment index
    pub index: usize,
    /// Loaded media, or why it failed
    pub result: IdeafeedResult<LoadedMedia>,
}

/// Start preloading every attachment concurrently.
///
/// The returned set yields each outcome as it settles, in completion order.
pub fn preload_all<L>(
    loader: Arc<L>,
    media: &[ResolvedMedia],
) -> FuturesUnordered<BoxFuture<'static, PreloadOutcome>>
where
    L: MediaLoader + ?Sized + 'static,
{
    media
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let loader = Arc::clone(&loader);
            let key = entry.key.clone();
            let url = entry.url.clone();
            async move {
                let result = match url {
                    Some(url) => loader.load(&url).await,
                    None => Err(MediaError::new(MediaErrorKind::MissingUrl(key.to_string())).into()),
                };
                PreloadOutcome { index, result }
            }
            .boxed()
        })
        .collect()
}
