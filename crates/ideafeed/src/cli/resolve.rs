//! Attachment key resolution command handler.

use super::load_config;
use ideafeed::{AttachmentKey, HttpIdeaClient, IdeafeedResult, MediaResolver};
use std::path::Path;
use std::sync::Arc;

/// Resolve `keys` and print one line per key, in input order.
#[tracing::instrument(skip(keys), fields(count = keys.len()))]
pub async fn resolve_keys(config: Option<&Path>, keys: Vec<String>) -> IdeafeedResult<()> {
    let config = load_config(config)?;
    let api = Arc::new(HttpIdeaClient::from_config(&config)?);
    let resolver = MediaResolver::new(api, config.media.placeholder_base.clone());

    let keys: Vec<AttachmentKey> = keys.into_iter().map(AttachmentKey::from).collect();
    for media in resolver.resolve(&keys).await {
        let url = media.url.as_deref().unwrap_or("-");
        if media.placeholder {
            println!("{}\t{}\t(placeholder)", media.key, url);
        } else {
            println!("{}\t{}", media.key, url);
        }
    }
    Ok(())
}
