//! Background resolution and preload for a mounted carousel.

use crate::{CarouselUpdate, MediaResolver, preload_all};
use futures::StreamExt;
use ideafeed_core::{AttachmentKey, Toast};
use ideafeed_interface::{AttachmentApi, MediaLoader, Notifier};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info_span, warn};

/// Starts the background work that feeds a [`Carousel`](crate::Carousel).
///
/// Each mount gets its own task: resolve every key, report the URLs, then
/// preload every attachment concurrently and report each as it settles.
pub struct CarouselLoader<A: ?Sized, L: ?Sized> {
    resolver: Arc<MediaResolver<A>>,
    loader: Arc<L>,
    notifier: Arc<dyn Notifier>,
}

impl<A: ?Sized, L: ?Sized> Clone for CarouselLoader<A, L> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            loader: Arc::clone(&self.loader),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<A, L> CarouselLoader<A, L>
where
    A: AttachmentApi + ?Sized + 'static,
    L: MediaLoader + ?Sized + 'static,
{
    /// Loader resolving through `resolver`, fetching through `loader` and
    /// reporting attachment failures to `notifier`.
    pub fn new(resolver: MediaResolver<A>, loader: Arc<L>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            resolver: Arc::new(resolver),
            loader,
            notifier,
        }
    }

    /// Spawn the work for mount `generation`. Must run inside a tokio runtime.
    pub fn spawn(&self, generation: u64, keys: Vec<AttachmentKey>) -> LoadHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let span = info_span!("carousel_load", generation, count = keys.len());
        let task = tokio::spawn(
            load_attachments(
                Arc::clone(&self.resolver),
                Arc::clone(&self.loader),
                Arc::clone(&self.notifier),
                generation,
                keys,
                tx,
            )
            .instrument(span),
        );
        LoadHandle { updates: rx, task }
    }
}

async fn load_attachments<A, L>(
    resolver: Arc<MediaResolver<A>>,
    loader: Arc<L>,
    notifier: Arc<dyn Notifier>,
    generation: u64,
    keys: Vec<AttachmentKey>,
    tx: mpsc::UnboundedSender<CarouselUpdate>,
) where
    A: AttachmentApi + ?Sized + 'static,
    L: MediaLoader + ?Sized + 'static,
{
    let media = resolver.resolve(&keys).await;
    let mut preloads = preload_all(loader, &media);

    if tx
        .send(CarouselUpdate::Resolved { generation, media })
        .is_err()
    {
        debug!("Carousel gone before resolution finished");
        return;
    }

    while let Some(outcome) = preloads.next().await {
        let loaded = match outcome.result {
            Ok(media) => {
                debug!(index = outcome.index, kind = %media.kind(), "Attachment preloaded");
                true
            }
            Err(e) => {
                warn!(index = outcome.index, error = %e, "Attachment failed to preload");
                if !tx.is_closed() {
                    notifier.notify(Toast::attachment_failed());
                }
                false
            }
        };

        let update = CarouselUpdate::Preloaded {
            generation,
            index: outcome.index,
            loaded,
        };
        if tx.send(update).is_err() {
            debug!("Carousel gone, abandoning remaining preloads");
            return;
        }
    }
}

/// Receiving end of one mount's background work.
///
/// Dropping the handle aborts the work; results still in flight are never applied.
#[derive(Debug)]
pub struct LoadHandle {
    updates: mpsc::UnboundedReceiver<CarouselUpdate>,
    task: JoinHandle<()>,
}

impl LoadHandle {
    /// Next update, or `None` once the work finished and every update was taken.
    pub async fn next(&mut self) -> Option<CarouselUpdate> {
        self.updates.recv().await
    }

    /// Next update if one is already waiting.
    pub fn try_next(&mut self) -> Option<CarouselUpdate> {
        self.updates.try_recv().ok()
    }

    /// Whether the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
