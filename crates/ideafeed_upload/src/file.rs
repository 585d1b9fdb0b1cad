//! Reading files from disk into a draft.

use ideafeed_core::{LocalFile, content_type_for_path};
use ideafeed_error::{IdeafeedResult, LocalFileError, LocalFileErrorKind};
use std::path::Path;

/// Read `path` into memory, inferring the content type from its extension.
///
/// # Errors
///
/// Fails when the path has no file name or cannot be read.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn read_local_file(path: impl AsRef<Path>) -> IdeafeedResult<LocalFile> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| {
            LocalFileError::new(LocalFileErrorKind::InvalidPath(path.display().to_string()))
        })?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        LocalFileError::new(LocalFileErrorKind::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    tracing::debug!(file = %name, size = bytes.len(), "Read local file");

    let file = LocalFile::builder()
        .name(name)
        .content_type(content_type_for_path(path))
        .bytes(bytes)
        .build()
        .map_err(|e| {
            LocalFileError::new(LocalFileErrorKind::InvalidPath(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
    Ok(file)
}
