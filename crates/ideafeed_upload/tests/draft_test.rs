//! Tests for drafts and their previews.

mod test_utils;

use ideafeed_core::{LocalFile, MediaKind};
use ideafeed_error::{IdeafeedErrorKind, LocalFileErrorKind};
use ideafeed_upload::{PostDraft, PreviewRegistry, read_local_file};
use test_utils::{file, files};

#[test]
fn removing_a_file_revokes_only_its_preview() {
    let registry = PreviewRegistry::new();
    let mut draft = PostDraft::new(registry.clone());
    draft.add_files(files(&["A", "B", "C"]));
    let kept = draft.files()[0].preview().url().to_string();
    let removed_url = draft.files()[1].preview().url().to_string();

    let removed = draft.remove_file(1);

    assert_eq!(removed.map(|f| f.name().clone()), Some("B".to_string()));
    assert!(!registry.is_live(&removed_url));
    assert!(registry.is_live(&kept));
    assert_eq!(registry.revoked_count(), 1);
    let names: Vec<&str> = draft.files().iter().map(|f| f.file().name().as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn removing_out_of_range_changes_nothing() {
    let registry = PreviewRegistry::new();
    let mut draft = PostDraft::new(registry.clone());
    draft.add_file(file("A"));

    assert!(draft.remove_file(3).is_none());
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn clear_and_drop_revoke_every_preview_once() {
    let registry = PreviewRegistry::new();
    let mut draft = PostDraft::new(registry.clone());
    draft.add_files(files(&["A", "B"]));

    draft.clear();
    assert_eq!(registry.live_count(), 0);
    assert_eq!(registry.revoked_count(), 2);
    assert!(!draft.is_submittable());

    draft.add_file(file("C"));
    drop(draft);
    assert_eq!(registry.live_count(), 0);
    assert_eq!(registry.revoked_count(), 3);
}

#[test]
fn preview_urls_are_unique() {
    let registry = PreviewRegistry::new();
    let mut draft = PostDraft::new(registry.clone());
    draft.add_files(files(&["A", "A"]));

    assert_ne!(
        draft.files()[0].preview().url(),
        draft.files()[1].preview().url()
    );
}

#[test]
fn generic_files_preview_with_name_and_size() {
    let registry = PreviewRegistry::new();
    let pdf = LocalFile::builder()
        .name("notes.pdf")
        .content_type("application/pdf")
        .bytes(vec![0u8; 1_572_864])
        .build()
        .unwrap();

    let preview = registry.create(&pdf);
    assert_eq!(preview.kind(), MediaKind::Other);
    assert_eq!(preview.label(), "notes.pdf (1.50 MB)");
}

#[tokio::test]
async fn reads_file_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Clip.MP4");
    std::fs::write(&path, [0u8, 0, 0, 24])?;

    let local = read_local_file(&path).await?;

    assert_eq!(local.name(), "Clip.MP4");
    assert_eq!(local.content_type(), "video/mp4");
    assert_eq!(local.kind(), MediaKind::Video);
    assert_eq!(local.size(), 4);
    Ok(())
}

#[tokio::test]
async fn unreadable_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = read_local_file(dir.path().join("missing.png"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        IdeafeedErrorKind::LocalFile(e) if matches!(e.kind, LocalFileErrorKind::Read { .. })
    ));
    Ok(())
}
