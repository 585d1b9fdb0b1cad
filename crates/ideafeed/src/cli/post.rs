//! Post creation command handler.

use super::{load_config, print_toasts};
use ideafeed::{Composer, HttpIdeaClient, IdeafeedResult, ToastLog, read_local_file};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read `files` from disk and submit them as a new post.
#[tracing::instrument(skip(title, description, files), fields(files = files.len()))]
pub async fn create_post(
    config: Option<&Path>,
    title: String,
    description: String,
    files: Vec<PathBuf>,
) -> IdeafeedResult<()> {
    let config = load_config(config)?;
    let api = Arc::new(HttpIdeaClient::from_config(&config)?);
    let toasts = Arc::new(ToastLog::default());
    let composer = Composer::new(api, toasts.clone());

    let mut local_files = Vec::with_capacity(files.len());
    for path in &files {
        local_files.push(read_local_file(path).await?);
    }

    composer.edit(|draft| {
        draft.set_title(title);
        draft.set_description(description);
        draft.add_files(local_files);
    });

    let result = composer.submit().await;
    print_toasts(&toasts);

    let idea = result?;
    println!(
        "Created \"{}\" with {} attachments",
        idea.title,
        idea.supporting_documents.len()
    );
    Ok(())
}
