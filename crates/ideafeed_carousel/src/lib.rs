//! Multi-attachment media carousel for idea posts.
//!
//! A post shows a synthetic description slide followed by one slide per
//! attachment. This crate provides the pieces behind it:
//! - [`MediaResolver`] - attachment keys to display URLs, concurrently, with placeholders
//! - [`PreloadCache`] - which attachments finished downloading
//! - [`GestureDetector`] - touch samples to swipe intents
//! - [`CarouselController`] - slide index with wraparound
//! - [`Carousel`] - the composed state machine owned by one post
//! - [`CarouselLoader`] - background resolution and preload, reported as [`CarouselUpdate`]s
//! - [`FeedPost`] - an idea paired with its carousel and like state
//!
//! State changes only through `&mut Carousel`; background work reports
//! back over a channel and stale reports are discarded by generation.

#![warn(missing_docs)]

mod carousel;
mod controller;
mod feed;
mod gesture;
mod preload;
mod resolver;
mod session;
mod slide;

pub use carousel::{Carousel, CarouselAction, CarouselUpdate, CarouselView, NavIntent, SlideView};
pub use controller::{CarouselController, SlideIndicator};
pub use feed::{FeedPost, load_feed};
pub use gesture::{DEFAULT_SWIPE_THRESHOLD, GestureDetector, GestureState, SwipeIntent};
pub use preload::{PreloadCache, PreloadOutcome, preload_all};
pub use resolver::MediaResolver;
pub use session::{CarouselLoader, LoadHandle};
pub use slide::SlideIndex;
