//! Tests for preload tracking.

mod test_utils;

use futures::StreamExt;
use ideafeed_carousel::{PreloadCache, preload_all};
use ideafeed_core::ResolvedMedia;
use std::sync::Arc;
use std::time::Duration;
use test_utils::MockMediaLoader;

#[test]
fn loaded_set_never_shrinks() {
    let mut cache = PreloadCache::new(3);
    cache.mark_loaded(1);

    assert!(!cache.mark_failed(1));
    assert!(cache.is_loaded(1));
    assert!(!cache.needs_fetch(1));

    assert!(cache.mark_failed(0));
    assert!(cache.mark_loaded(0));
    assert!(!cache.is_failed(0));
    assert_eq!(cache.loaded().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn out_of_range_marks_are_ignored() {
    let mut cache = PreloadCache::new(1);
    assert!(!cache.mark_loaded(1));
    assert!(!cache.mark_failed(5));
    assert!(!cache.all_settled());
}

#[test]
fn empty_cache_is_settled() {
    assert!(PreloadCache::new(0).all_settled());
}

#[test]
fn reset_forgets_previous_list() {
    let mut cache = PreloadCache::new(2);
    cache.mark_loaded(0);
    cache.mark_loaded(1);

    cache.reset(1);
    assert_eq!(cache.loaded_count(), 0);
    assert_eq!(cache.expected(), 1);
    assert!(cache.needs_fetch(0));
}

#[tokio::test]
async fn outcomes_arrive_in_completion_order() -> anyhow::Result<()> {
    let loader = Arc::new(
        MockMediaLoader::new()
            .with_delay("https://cdn.test/a", Duration::from_millis(80))
            .with_delay("https://cdn.test/b", Duration::from_millis(5)),
    );
    let media = vec![
        ResolvedMedia::resolved("a".into(), "https://cdn.test/a"),
        ResolvedMedia::resolved("b".into(), "https://cdn.test/b"),
    ];

    let mut preloads = preload_all(Arc::clone(&loader), &media);
    let mut order = Vec::new();
    while let Some(outcome) = preloads.next().await {
        assert!(outcome.result.is_ok());
        order.push(outcome.index);
    }

    assert_eq!(order, vec![1, 0]);
    assert_eq!(loader.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn failures_are_isolated() -> anyhow::Result<()> {
    let loader = Arc::new(MockMediaLoader::new().with_broken("https://cdn.test/b"));
    let media = vec![
        ResolvedMedia::resolved("a".into(), "https://cdn.test/a"),
        ResolvedMedia::resolved("b".into(), "https://cdn.test/b"),
        ResolvedMedia::pending("c".into()),
    ];

    let mut cache = PreloadCache::new(media.len());
    let mut preloads = preload_all(Arc::clone(&loader), &media);
    while let Some(outcome) = preloads.next().await {
        if outcome.result.is_ok() {
            cache.mark_loaded(outcome.index);
        } else {
            cache.mark_failed(outcome.index);
        }
    }

    assert!(cache.all_settled());
    assert!(cache.is_loaded(0));
    assert!(cache.is_failed(1));
    assert!(cache.is_failed(2));
    // The entry without a URL never reaches the loader.
    assert_eq!(loader.call_count(), 2);
    Ok(())
}
