//! Idea posts in the feed.

use crate::{Carousel, CarouselAction, CarouselLoader, CarouselView, LoadHandle};
use ideafeed_core::{Idea, Toast};
use ideafeed_error::IdeafeedResult;
use ideafeed_interface::{AttachmentApi, IdeaApi, MediaLoader, Notifier};
use tracing::{error, info, instrument};

/// Fetch the related ideas feed.
///
/// A failure is shown as a toast and returned to the caller.
#[instrument(skip_all)]
pub async fn load_feed<I>(api: &I, notifier: &dyn Notifier) -> IdeafeedResult<Vec<Idea>>
where
    I: IdeaApi + ?Sized,
{
    match api.related_ideas().await {
        Ok(ideas) => {
            info!(count = ideas.len(), "Loaded feed");
            Ok(ideas)
        }
        Err(e) => {
            error!(error = %e, "Failed to load feed");
            notifier.notify(Toast::feed_failed());
            Err(e)
        }
    }
}

/// One idea on screen: its carousel, its like state and its background loading.
#[derive(Debug)]
pub struct FeedPost {
    idea: Idea,
    carousel: Carousel,
    liked: bool,
    load: Option<LoadHandle>,
}

impl FeedPost {
    /// Post for `idea` around an unmounted carousel.
    pub fn new(idea: Idea, carousel: Carousel) -> Self {
        Self {
            idea,
            carousel,
            liked: false,
            load: None,
        }
    }

    /// The idea shown.
    pub fn idea(&self) -> &Idea {
        &self.idea
    }

    /// The post's carousel.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Mutable access for input handling.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Whether the viewer liked the post.
    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Mount the idea's attachments and start loading them.
    pub fn mount<A, L>(&mut self, loader: &CarouselLoader<A, L>)
    where
        A: AttachmentApi + ?Sized + 'static,
        L: MediaLoader + ?Sized + 'static,
    {
        let keys = self.idea.supporting_documents.clone();
        let generation = self.carousel.mount(keys.clone());
        // Replacing the handle aborts the previous mount's work.
        self.load = Some(loader.spawn(generation, keys));
    }

    /// Stop loading and drop the attachment list.
    pub fn unmount(&mut self) {
        self.load = None;
        self.carousel.unmount();
    }

    /// Apply every update that already arrived.
    pub fn poll_updates(&mut self) -> usize {
        let Some(load) = self.load.as_mut() else {
            return 0;
        };
        let mut applied = 0;
        while let Some(update) = load.try_next() {
            if self.carousel.apply(update) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until loading finished or the background work ended.
    pub async fn settle(&mut self) {
        while self.carousel.is_loading() {
            let Some(load) = self.load.as_mut() else {
                return;
            };
            match load.next().await {
                Some(update) => {
                    self.carousel.apply(update);
                }
                None => return,
            }
        }
    }

    /// Double tap on the current slide; toggles the like on media slides.
    pub fn double_tap(&mut self) -> Option<CarouselAction> {
        let action = self.carousel.double_tap();
        if action == Some(CarouselAction::ToggleLike) {
            self.liked = !self.liked;
        }
        action
    }

    /// Render-ready snapshot of the carousel.
    pub fn view(&self) -> CarouselView {
        self.carousel.view()
    }
}
