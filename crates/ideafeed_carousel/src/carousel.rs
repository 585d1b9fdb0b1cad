//! The composed carousel state machine.

use crate::{
    CarouselController, GestureDetector, PreloadCache, SlideIndex, SlideIndicator, SwipeIntent,
};
use ideafeed_core::{AttachmentKey, ResolvedMedia};
use ideafeed_error::MediaResult;
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

/// A navigation request, applied immediately or queued while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// Next slide
    Advance,
    /// Previous slide
    Retreat,
    /// A specific, already validated slide
    Jump(SlideIndex),
}

impl From<SwipeIntent> for NavIntent {
    fn from(intent: SwipeIntent) -> Self {
        match intent {
            SwipeIntent::Advance => Self::Advance,
            SwipeIntent::Retreat => Self::Retreat,
        }
    }
}

/// Progress reported by background resolution and preload.
///
/// Every update names the mount generation it belongs to; updates for an
/// older generation are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselUpdate {
    /// All attachment URLs resolved, in display order
    Resolved {
        /// Mount generation
        generation: u64,
        /// One entry per attachment key
        media: Vec<ResolvedMedia>,
    },
    /// One attachment finished preloading
    Preloaded {
        /// Mount generation
        generation: u64,
        /// Attachment index
        index: usize,
        /// Whether it downloaded and decoded
        loaded: bool,
    },
}

impl CarouselUpdate {
    /// Mount generation this update belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            Self::Resolved { generation, .. } | Self::Preloaded { generation, .. } => *generation,
        }
    }
}

/// Side effect requested by the carousel for its surrounding post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselAction {
    /// Double tap on a media slide
    ToggleLike,
}

/// What the current slide should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideView {
    /// Attachments are still resolving or preloading
    Loading,
    /// Caption and description
    Description,
    /// An attachment slide
    Media {
        /// Slide position
        slide: SlideIndex,
        /// Attachment being shown
        media: ResolvedMedia,
        /// Whether its preload succeeded; a failed preload keeps the slide spinning
        ready: bool,
    },
}

/// Render-ready snapshot of a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    /// Content of the current slide
    pub slide: SlideView,
    /// One dot per slide, shown even while loading
    pub indicators: Vec<SlideIndicator>,
    /// Whether the global loading placeholder is up
    pub loading: bool,
}

/// Carousel state for one post.
///
/// Navigation input arriving while attachments load is queued and applied
/// in order once every preload settled.
///
/// # Examples
///
/// ```
/// use ideafeed_carousel::{Carousel, CarouselUpdate, SlideIndex};
/// use ideafeed_core::ResolvedMedia;
///
/// let mut carousel = Carousel::new();
/// let generation = carousel.mount(vec!["a".into()]);
///
/// carousel.next();
/// assert_eq!(carousel.index(), SlideIndex::DESCRIPTION);
///
/// carousel.apply(CarouselUpdate::Resolved {
///     generation,
///     media: vec![ResolvedMedia::resolved("a".into(), "https://cdn/a.png")],
/// });
/// carousel.apply(CarouselUpdate::Preloaded { generation, index: 0, loaded: true });
///
/// assert!(!carousel.is_loading());
/// assert_eq!(carousel.index(), SlideIndex::new(1));
/// ```
#[derive(Debug, Clone)]
pub struct Carousel {
    generation: u64,
    media: Vec<ResolvedMedia>,
    resolved: bool,
    cache: PreloadCache,
    controller: CarouselController,
    gesture: GestureDetector,
    queued: VecDeque<NavIntent>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    /// Empty, unmounted carousel using the default swipe threshold.
    pub fn new() -> Self {
        Self::with_gesture(GestureDetector::new())
    }

    /// Empty, unmounted carousel using a custom gesture detector.
    pub fn with_gesture(gesture: GestureDetector) -> Self {
        Self {
            generation: 0,
            media: Vec::new(),
            resolved: true,
            cache: PreloadCache::new(0),
            controller: CarouselController::new(0),
            gesture,
            queued: VecDeque::new(),
        }
    }

    /// Show a new attachment list, starting on the description slide.
    ///
    /// Returns the generation that background updates must carry.
    #[instrument(skip(self, keys), fields(count = keys.len()))]
    pub fn mount(&mut self, keys: Vec<AttachmentKey>) -> u64 {
        self.generation += 1;
        let count = keys.len();
        self.media = keys.into_iter().map(ResolvedMedia::pending).collect();
        self.resolved = count == 0;
        self.cache.reset(count);
        self.controller = CarouselController::new(count);
        self.gesture.touch_cancel();
        self.queued.clear();
        debug!(generation = self.generation, "Mounted carousel");
        self.generation
    }

    /// Drop the attachment list. Outstanding updates become stale.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.media.clear();
        self.resolved = true;
        self.cache.reset(0);
        self.controller = CarouselController::new(0);
        self.gesture.touch_cancel();
        self.queued.clear();
        debug!(generation = self.generation, "Unmounted carousel");
    }

    /// Apply a background update. Returns `false` when it was discarded.
    pub fn apply(&mut self, update: CarouselUpdate) -> bool {
        if update.generation() != self.generation {
            debug!(
                update_generation = update.generation(),
                generation = self.generation,
                "Discarding stale carousel update"
            );
            return false;
        }

        match update {
            CarouselUpdate::Resolved { media, .. } => {
                if media.len() != self.media.len() {
                    warn!(
                        expected = self.media.len(),
                        received = media.len(),
                        "Discarding resolution with wrong attachment count"
                    );
                    return false;
                }
                self.media = media;
                self.resolved = true;
            }
            CarouselUpdate::Preloaded { index, loaded, .. } => {
                let changed = if loaded {
                    self.cache.mark_loaded(index)
                } else {
                    self.cache.mark_failed(index)
                };
                if !changed {
                    return false;
                }
            }
        }

        self.flush_queued();
        true
    }

    /// Mount generation of the current attachment list.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the global loading placeholder is up.
    pub fn is_loading(&self) -> bool {
        !self.resolved || !self.cache.all_settled()
    }

    /// Current slide.
    pub fn index(&self) -> SlideIndex {
        self.controller.index()
    }

    /// Attachments in display order.
    pub fn media(&self) -> &[ResolvedMedia] {
        &self.media
    }

    /// Preload state of the current attachment list.
    pub fn cache(&self) -> &PreloadCache {
        &self.cache
    }

    /// Slide indicators, `N + 1` of them.
    pub fn indicators(&self) -> Vec<SlideIndicator> {
        self.controller.indicators()
    }

    /// Navigation waiting for loading to finish.
    pub fn queued(&self) -> impl Iterator<Item = &NavIntent> {
        self.queued.iter()
    }

    /// Next slide, wrapping.
    pub fn next(&mut self) {
        self.navigate(NavIntent::Advance);
    }

    /// Previous slide, wrapping.
    pub fn previous(&mut self) {
        self.navigate(NavIntent::Retreat);
    }

    /// Jump to slide `index`, as when an indicator is clicked.
    ///
    /// # Errors
    ///
    /// Returns `SlideOutOfRange` for `index > N`; nothing changes or queues.
    pub fn jump_to(&mut self, index: usize) -> MediaResult<()> {
        let slide = self.controller.validate(index)?;
        self.navigate(NavIntent::Jump(slide));
        Ok(())
    }

    /// Touch began at `x`.
    pub fn touch_start(&mut self, x: f64) {
        self.gesture.touch_start(x);
    }

    /// Touch moved to `x`.
    pub fn touch_move(&mut self, x: f64) {
        self.gesture.touch_move(x);
    }

    /// Touch ended; navigates when the swipe passed the threshold.
    pub fn touch_end(&mut self) -> Option<SwipeIntent> {
        let intent = self.gesture.touch_end();
        if let Some(intent) = intent {
            self.navigate(intent.into());
        }
        intent
    }

    /// Touch was cancelled by the platform.
    pub fn touch_cancel(&mut self) {
        self.gesture.touch_cancel();
    }

    /// Double tap or double click on the current slide.
    ///
    /// Media slides ask the post to toggle its like; the description slide does nothing.
    pub fn double_tap(&self) -> Option<CarouselAction> {
        if self.index().is_description() {
            None
        } else {
            Some(CarouselAction::ToggleLike)
        }
    }

    /// Render-ready snapshot.
    pub fn view(&self) -> CarouselView {
        let loading = self.is_loading();
        let slide = if loading {
            SlideView::Loading
        } else {
            match self.index().attachment_index() {
                None => SlideView::Description,
                Some(i) => match self.media.get(i) {
                    Some(media) => SlideView::Media {
                        slide: self.index(),
                        media: media.clone(),
                        ready: self.cache.is_loaded(i),
                    },
                    None => SlideView::Description,
                },
            }
        };

        CarouselView {
            slide,
            indicators: self.indicators(),
            loading,
        }
    }

    fn navigate(&mut self, intent: NavIntent) {
        if self.is_loading() {
            debug!(?intent, "Queueing navigation until attachments load");
            self.queued.push_back(intent);
            return;
        }
        self.perform(intent);
    }

    fn flush_queued(&mut self) {
        if self.is_loading() {
            return;
        }
        while let Some(intent) = self.queued.pop_front() {
            self.perform(intent);
        }
    }

    fn perform(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Advance => {
                self.controller.advance();
            }
            NavIntent::Retreat => {
                self.controller.retreat();
            }
            NavIntent::Jump(slide) => {
                if let Err(e) = self.controller.jump_to(slide.get()) {
                    warn!(error = %e, "Dropping queued jump");
                }
            }
        }
    }
}
