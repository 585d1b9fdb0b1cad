//! Slide positions.

/// Position in a carousel: 0 is the description slide, `i >= 1` shows
/// attachment `i - 1`.
///
/// # Examples
///
/// ```
/// use ideafeed_carousel::SlideIndex;
///
/// assert!(SlideIndex::DESCRIPTION.is_description());
/// assert_eq!(SlideIndex::new(3).attachment_index(), Some(2));
/// assert_eq!(SlideIndex::DESCRIPTION.attachment_index(), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, derive_more::Display,
)]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// The caption and description slide.
    pub const DESCRIPTION: SlideIndex = SlideIndex(0);

    /// Wrap a raw slide number.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw slide number.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether this is the description slide.
    pub const fn is_description(self) -> bool {
        self.0 == 0
    }

    /// Index into the attachment list, or `None` for the description slide.
    pub const fn attachment_index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            i => Some(i - 1),
        }
    }

    /// The slide showing attachment `index`.
    pub const fn for_attachment(index: usize) -> Self {
        Self(index + 1)
    }
}
