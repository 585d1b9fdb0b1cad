//! Ideafeed - client core for an idea-sharing social feed
//!
//! Every post in the feed shows a description slide followed by a carousel
//! of attachments. Creating a post uploads its files one at a time and then
//! registers the idea with the keys the server handed back.
//!
//! # Features
//!
//! - **Media resolution**: attachment keys resolved concurrently, placeholders on failure
//! - **Preloading**: every attachment downloaded and decoded before the carousel unlocks
//! - **Gestures**: swipe recognition with a strict pixel threshold
//! - **Carousel**: wrapping slide navigation, queued while loading
//! - **Uploads**: sequential upload pipeline with one creation request
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ideafeed::{Carousel, CarouselLoader, FeedPost, HttpIdeaClient, HttpMediaLoader,
//!     IdeafeedConfig, MediaResolver, TracingNotifier, load_feed};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = IdeafeedConfig::load()?;
//!     let api = Arc::new(HttpIdeaClient::from_config(&config)?);
//!     let notifier = Arc::new(TracingNotifier);
//!
//!     let resolver = MediaResolver::new(api.clone(), config.media.placeholder_base.clone());
//!     let media = Arc::new(HttpMediaLoader::from_config(&config.api)?);
//!     let loader = CarouselLoader::new(resolver, media, notifier.clone());
//!
//!     for idea in load_feed(api.as_ref(), notifier.as_ref()).await? {
//!         let mut post = FeedPost::new(idea, Carousel::new());
//!         post.mount(&loader);
//!         post.settle().await;
//!         println!("{:?}", post.view());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `ideafeed_error` - Error types
//! - `ideafeed_core` - Shared data types (keys, ideas, files, toasts)
//! - `ideafeed_interface` - Backend, media loader and notifier traits
//! - `ideafeed_client` - Configuration and the HTTP implementation
//! - `ideafeed_carousel` - Resolver, preload cache, gestures and carousel state
//! - `ideafeed_upload` - Drafts, previews and the upload pipeline
//!
//! This crate re-exports everything for convenience.

pub use ideafeed_carousel::{
    Carousel, CarouselAction, CarouselController, CarouselLoader, CarouselUpdate, CarouselView,
    DEFAULT_SWIPE_THRESHOLD, FeedPost, GestureDetector, GestureState, LoadHandle, MediaResolver,
    NavIntent, PreloadCache, PreloadOutcome, SlideIndex, SlideIndicator, SlideView, SwipeIntent,
    load_feed, preload_all,
};
pub use ideafeed_client::{ApiConfig, HttpIdeaClient, HttpMediaLoader, IdeafeedConfig, MediaConfig, TOKEN_ENV};
pub use ideafeed_core::{
    AttachmentKey, Idea, IdeaId, LocalFile, LocalFileBuilder, MediaKind, NewIdea, ResolvedMedia,
    Toast, ToastVariant, content_type_for_path,
};
pub use ideafeed_error::{
    ConfigError, DraftField, HttpError, IdeafeedError, IdeafeedErrorKind, IdeafeedResult,
    JsonError, LocalFileError, LocalFileErrorKind, MediaError, MediaErrorKind, MediaResult,
    UploadError, UploadErrorKind, UploadResult, ValidationError,
};
pub use ideafeed_interface::{
    AttachmentApi, IdeaApi, LoadedMedia, MediaLoader, Notifier, ToastLog, TracingNotifier,
};
pub use ideafeed_upload::{
    Composer, DraftFile, PostDraft, PreviewHandle, PreviewRegistry, UploadJob, UploadPipeline,
    UploadQueue, UploadStatus, read_local_file,
};
