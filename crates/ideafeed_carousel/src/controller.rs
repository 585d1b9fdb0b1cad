//! Slide index state machine.

use crate::{SlideIndex, SwipeIntent};
use ideafeed_error::{MediaError, MediaErrorKind, MediaResult};
use tracing::{debug, warn};

/// One position indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideIndicator {
    /// Slide this dot jumps to
    pub index: SlideIndex,
    /// Whether this dot marks the current slide
    pub active: bool,
}

/// Owns the current slide of a carousel with `N` attachments.
///
/// Slides run `0..=N`; advancing and retreating wrap modulo `N + 1`.
///
/// # Examples
///
/// ```
/// use ideafeed_carousel::{CarouselController, SlideIndex};
///
/// let mut controller = CarouselController::new(2);
/// controller.retreat();
/// assert_eq!(controller.index(), SlideIndex::new(2));
/// controller.advance();
/// assert_eq!(controller.index(), SlideIndex::DESCRIPTION);
/// assert!(controller.jump_to(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    index: SlideIndex,
    attachment_count: usize,
}

impl CarouselController {
    /// Controller for `attachment_count` attachments, on the description slide.
    pub fn new(attachment_count: usize) -> Self {
        Self {
            index: SlideIndex::DESCRIPTION,
            attachment_count,
        }
    }

    /// Current slide.
    pub fn index(&self) -> SlideIndex {
        self.index
    }

    /// Number of attachment slides.
    pub fn attachment_count(&self) -> usize {
        self.attachment_count
    }

    /// Number of slides including the description slide.
    pub fn slide_count(&self) -> usize {
        self.attachment_count + 1
    }

    /// Largest valid slide index.
    pub fn max_index(&self) -> usize {
        self.attachment_count
    }

    /// Move to the next slide, wrapping to the description slide after the last.
    pub fn advance(&mut self) -> SlideIndex {
        self.index = SlideIndex::new((self.index.get() + 1) % self.slide_count());
        debug!(index = %self.index, "Advanced slide");
        self.index
    }

    /// Move to the previous slide, wrapping from the description slide to the last.
    pub fn retreat(&mut self) -> SlideIndex {
        self.index = match self.index.get() {
            0 => SlideIndex::new(self.max_index()),
            i => SlideIndex::new(i - 1),
        };
        debug!(index = %self.index, "Retreated slide");
        self.index
    }

    /// Apply a swipe.
    pub fn apply(&mut self, intent: SwipeIntent) -> SlideIndex {
        match intent {
            SwipeIntent::Advance => self.advance(),
            SwipeIntent::Retreat => self.retreat(),
        }
    }

    /// Check that `index` names a slide without moving.
    pub fn validate(&self, index: usize) -> MediaResult<SlideIndex> {
        if index > self.max_index() {
            warn!(requested = index, max = self.max_index(), "Rejected slide jump");
            return Err(MediaError::new(MediaErrorKind::SlideOutOfRange {
                requested: index,
                max: self.max_index(),
            }));
        }
        Ok(SlideIndex::new(index))
    }

    /// Jump to slide `index`. Out-of-range requests leave the index unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SlideOutOfRange` when `index > N`.
    pub fn jump_to(&mut self, index: usize) -> MediaResult<SlideIndex> {
        self.index = self.validate(index)?;
        debug!(index = %self.index, "Jumped to slide");
        Ok(self.index)
    }

    /// Back to the description slide.
    pub fn reset(&mut self) {
        self.index = SlideIndex::DESCRIPTION;
    }

    /// One indicator per slide, `N + 1` in total.
    pub fn indicators(&self) -> Vec<SlideIndicator> {
        (0..self.slide_count())
            .map(|i| SlideIndicator {
                index: SlideIndex::new(i),
                active: i == self.index.get(),
            })
            .collect()
    }
}
