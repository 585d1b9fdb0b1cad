//! Attachment URL resolution.

use futures::future::join_all;
use ideafeed_core::{AttachmentKey, ResolvedMedia};
use ideafeed_error::{MediaError, MediaErrorKind, MediaResult};
use ideafeed_interface::AttachmentApi;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

/// Resolves attachment keys to display URLs.
///
/// One lookup per key, all in flight at once. A failed or empty lookup
/// degrades to a placeholder derived from the key; the batch never fails.
#[derive(Debug)]
pub struct MediaResolver<A: ?Sized> {
    api: Arc<A>,
    placeholder_base: String,
}

impl<A> MediaResolver<A>
where
    A: AttachmentApi + ?Sized,
{
    /// Resolver backed by `api`, falling back to images under `placeholder_base`.
    pub fn new(api: Arc<A>, placeholder_base: impl Into<String>) -> Self {
        Self {
            api,
            placeholder_base: placeholder_base.into(),
        }
    }

    /// Deterministic fallback URL for `key`: `{base}/seed/{key}/600/600`.
    pub fn placeholder_url(&self, key: &AttachmentKey) -> String {
        match Url::parse(&self.placeholder_base) {
            Ok(mut url) if !url.cannot_be_a_base() => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments
                        .pop_if_empty()
                        .extend(["seed", key.as_str(), "600", "600"]);
                }
                url.to_string()
            }
            _ => format!(
                "{}/seed/{}/600/600",
                self.placeholder_base.trim_end_matches('/'),
                key
            ),
        }
    }

    /// Resolve every key, preserving input order.
    #[instrument(skip_all, fields(count = keys.len()))]
    pub async fn resolve(&self, keys: &[AttachmentKey]) -> Vec<ResolvedMedia> {
        let media = join_all(keys.iter().map(|key| self.resolve_one(key))).await;
        debug!(
            placeholders = media.iter().filter(|m| m.placeholder).count(),
            "Resolved attachments"
        );
        media
    }

    /// Look up the display URL for a single key.
    ///
    /// # Errors
    ///
    /// Returns [`MediaErrorKind::Resolution`] if the lookup request fails and
    /// [`MediaErrorKind::MissingUrl`] if it succeeds without a usable URL.
    pub async fn lookup(&self, key: &AttachmentKey) -> MediaResult<String> {
        match self.api.file_url(key).await {
            Ok(Some(url)) if !url.trim().is_empty() => Ok(url),
            Ok(_) => Err(MediaError::new(MediaErrorKind::MissingUrl(key.to_string()))),
            Err(e) => Err(MediaError::new(MediaErrorKind::Resolution {
                key: key.to_string(),
                reason: e.to_string(),
            })),
        }
    }

    async fn resolve_one(&self, key: &AttachmentKey) -> ResolvedMedia {
        match self.lookup(key).await {
            Ok(url) => ResolvedMedia::resolved(key.clone(), url),
            Err(e) => {
                warn!(key = %key, error = %e, "Using placeholder for attachment");
                ResolvedMedia::fallback(key.clone(), self.placeholder_url(key))
            }
        }
    }
}
