//! Tests for attachment URL resolution.

mod test_utils;

use ideafeed_carousel::MediaResolver;
use ideafeed_core::AttachmentKey;
use ideafeed_error::MediaErrorKind;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{Lookup, MockAttachmentApi, keys};

const PLACEHOLDERS: &str = "https://picsum.photos";

#[tokio::test]
async fn failed_lookup_falls_back_in_place() -> anyhow::Result<()> {
    let api = Arc::new(
        MockAttachmentApi::new()
            .with_url("k1")
            .with_lookup("k2", Lookup::Fail)
            .with_url("k3"),
    );
    let resolver = MediaResolver::new(Arc::clone(&api), PLACEHOLDERS);

    let media = resolver.resolve(&keys(&["k1", "k2", "k3"])).await;

    let urls: Vec<Option<&str>> = media.iter().map(|m| m.url.as_deref()).collect();
    assert_eq!(
        urls,
        vec![
            Some("https://cdn.test/k1"),
            Some("https://picsum.photos/seed/k2/600/600"),
            Some("https://cdn.test/k3"),
        ]
    );
    assert!(!media[0].placeholder);
    assert!(media[1].placeholder);
    assert!(!media[2].placeholder);
    Ok(())
}

#[tokio::test]
async fn empty_lookup_uses_placeholder() -> anyhow::Result<()> {
    let api = Arc::new(
        MockAttachmentApi::new()
            .with_lookup("blank", Lookup::Empty)
            .with_lookup("spaces", Lookup::Url("   ".to_string())),
    );
    let resolver = MediaResolver::new(api, PLACEHOLDERS);

    let media = resolver.resolve(&keys(&["blank", "spaces"])).await;

    assert!(media.iter().all(|m| m.placeholder));
    assert_eq!(
        media[0].url.as_deref(),
        Some("https://picsum.photos/seed/blank/600/600")
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn lookups_run_concurrently_and_keep_order() -> anyhow::Result<()> {
    let api = Arc::new(
        MockAttachmentApi::new()
            .with_url("slow")
            .with_url("fast")
            .with_url("medium")
            .with_delay("slow", Duration::from_millis(300))
            .with_delay("fast", Duration::from_millis(10))
            .with_delay("medium", Duration::from_millis(100)),
    );
    let resolver = MediaResolver::new(Arc::clone(&api), PLACEHOLDERS);

    let started = tokio::time::Instant::now();
    let media = resolver.resolve(&keys(&["slow", "fast", "medium"])).await;

    assert_eq!(api.max_in_flight(), 3);
    assert!(started.elapsed() < Duration::from_millis(410));
    let order: Vec<&str> = media.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(order, vec!["slow", "fast", "medium"]);
    Ok(())
}

#[tokio::test]
async fn one_lookup_per_key() -> anyhow::Result<()> {
    let api = Arc::new(MockAttachmentApi::new().with_url("a").with_url("b"));
    let resolver = MediaResolver::new(Arc::clone(&api), PLACEHOLDERS);

    resolver.resolve(&keys(&["a", "b"])).await;

    let mut calls = api.calls();
    calls.sort();
    assert_eq!(calls, vec!["a".to_string(), "b".to_string()]);
    Ok(())
}

#[tokio::test]
async fn no_keys_resolves_to_nothing() -> anyhow::Result<()> {
    let api = Arc::new(MockAttachmentApi::new());
    let resolver = MediaResolver::new(Arc::clone(&api), PLACEHOLDERS);

    assert!(resolver.resolve(&[]).await.is_empty());
    assert!(api.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn lookup_reports_why_a_key_has_no_url() -> anyhow::Result<()> {
    let api = Arc::new(
        MockAttachmentApi::new()
            .with_url("ok")
            .with_lookup("down", Lookup::Fail)
            .with_lookup("blank", Lookup::Empty)
            .with_lookup("spaces", Lookup::Url(" ".to_string())),
    );
    let resolver = MediaResolver::new(api, PLACEHOLDERS);

    assert_eq!(
        resolver.lookup(&AttachmentKey::from("ok")).await?,
        "https://cdn.test/ok"
    );

    let err = resolver.lookup(&AttachmentKey::from("down")).await.unwrap_err();
    match err.kind() {
        MediaErrorKind::Resolution { key, reason } => {
            assert_eq!(key, "down");
            assert!(reason.contains("not found"));
        }
        other => panic!("expected resolution error, got {:?}", other),
    }

    for key in ["blank", "spaces"] {
        let err = resolver.lookup(&AttachmentKey::from(key)).await.unwrap_err();
        assert_eq!(err.kind(), &MediaErrorKind::MissingUrl(key.to_string()));
    }
    Ok(())
}

#[test]
fn placeholder_encodes_key() {
    let resolver = MediaResolver::new(Arc::new(MockAttachmentApi::new()), "https://img.test/base/");
    let key = AttachmentKey::from("a b/c");
    assert_eq!(
        resolver.placeholder_url(&key),
        "https://img.test/base/seed/a%20b%2Fc/600/600"
    );
}
