//! Feed command handler.

use super::{load_config, print_toasts};
use futures::future::join_all;
use ideafeed::{
    Carousel, CarouselLoader, FeedPost, GestureDetector, HttpIdeaClient, HttpMediaLoader,
    IdeafeedResult, MediaResolver, ToastLog, load_feed,
};
use std::path::Path;
use std::sync::Arc;

/// Load the feed, preload every post's attachments and print a summary per post.
#[tracing::instrument]
pub async fn show_feed(config: Option<&Path>) -> IdeafeedResult<()> {
    let config = load_config(config)?;
    let api = Arc::new(HttpIdeaClient::from_config(&config)?);
    let toasts = Arc::new(ToastLog::default());

    let ideas = match load_feed(api.as_ref(), toasts.as_ref()).await {
        Ok(ideas) => ideas,
        Err(e) => {
            print_toasts(&toasts);
            return Err(e);
        }
    };

    let resolver = MediaResolver::new(Arc::clone(&api), config.media.placeholder_base.clone());
    let media = Arc::new(HttpMediaLoader::from_config(&config.api)?);
    let loader = CarouselLoader::new(resolver, media, toasts.clone());

    let mut posts: Vec<FeedPost> = ideas
        .into_iter()
        .map(|idea| {
            let gesture = GestureDetector::with_threshold(config.media.swipe_threshold);
            let mut post = FeedPost::new(idea, Carousel::with_gesture(gesture));
            post.mount(&loader);
            post
        })
        .collect();

    join_all(posts.iter_mut().map(|post| post.settle())).await;

    for post in &posts {
        let idea = post.idea();
        let carousel = post.carousel();
        let placeholders = carousel.media().iter().filter(|m| m.placeholder).count();
        println!("{} by {}", idea.title, idea.user_name);
        println!(
            "  {} slides, {}/{} attachments ready, {} placeholders",
            carousel.indicators().len(),
            carousel.cache().loaded_count(),
            carousel.media().len(),
            placeholders
        );
    }

    tracing::info!(posts = posts.len(), "Feed loaded");
    print_toasts(&toasts);
    Ok(())
}
