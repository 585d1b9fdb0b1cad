//! Post drafts.

use crate::{PreviewHandle, PreviewRegistry};
use ideafeed_core::LocalFile;
use ideafeed_error::{DraftField, ValidationError};
use std::sync::Arc;
use tracing::debug;

/// A file attached to a draft, with its preview.
#[derive(Debug)]
pub struct DraftFile {
    file: LocalFile,
    preview: PreviewHandle,
}

impl DraftFile {
    /// The file to upload.
    pub fn file(&self) -> &LocalFile {
        &self.file
    }

    /// Its preview.
    pub fn preview(&self) -> &PreviewHandle {
        &self.preview
    }

    /// Detach the file, revoking the preview.
    pub fn into_file(self) -> LocalFile {
        self.file
    }
}

/// The post being composed.
///
/// Every file holds a live preview; removing, clearing or dropping the
/// draft revokes them.
#[derive(Debug)]
pub struct PostDraft {
    title: String,
    description: String,
    files: Vec<DraftFile>,
    previews: Arc<PreviewRegistry>,
}

impl PostDraft {
    /// Empty draft creating previews in `previews`.
    pub fn new(previews: Arc<PreviewRegistry>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            files: Vec::new(),
            previews,
        }
    }

    /// Post title as typed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Post description as typed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attached files in upload order.
    pub fn files(&self) -> &[DraftFile] {
        &self.files
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Append a file and create its preview.
    pub fn add_file(&mut self, file: LocalFile) {
        let preview = self.previews.create(&file);
        debug!(file = %file.name(), index = self.files.len(), "Added file to draft");
        self.files.push(DraftFile { file, preview });
    }

    /// Append several files in order.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = LocalFile>) {
        for file in files {
            self.add_file(file);
        }
    }

    /// Remove the file at `index`. Out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<LocalFile> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        debug!(file = %removed.file.name(), index, "Removed file from draft");
        Some(removed.into_file())
    }

    /// Reset every field and revoke every preview.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.files.clear();
    }

    /// Check that title, description and files are all present.
    ///
    /// # Errors
    ///
    /// Lists every missing field, in title, description, files order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(DraftField::Description);
        }
        if self.files.is_empty() {
            missing.push(DraftField::Files);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }

    /// Whether [`validate`](Self::validate) passes.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Title, description and file copies for submission.
    ///
    /// Text is sent as typed; trimming only decides whether a field is missing.
    pub(crate) fn snapshot(&self) -> (String, String, Vec<LocalFile>) {
        (
            self.title.clone(),
            self.description.clone(),
            self.files.iter().map(|f| f.file.clone()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> LocalFile {
        LocalFile::builder()
            .name(name)
            .bytes(vec![0u8; 4])
            .build()
            .unwrap()
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut draft = PostDraft::new(PreviewRegistry::new());
        draft.set_title("   ");
        draft.set_description("\n\t");
        draft.add_file(file("a.txt"));

        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing, vec![DraftField::Title, DraftField::Description]);
    }

    #[test]
    fn snapshot_keeps_text_as_typed() {
        let mut draft = PostDraft::new(PreviewRegistry::new());
        draft.set_title("  Bike racks ");
        draft.set_description(" More ");
        draft.add_file(file("a.txt"));

        let (title, description, files) = draft.snapshot();
        assert_eq!(title, "  Bike racks ");
        assert_eq!(description, " More ");
        assert_eq!(files.len(), 1);
    }
}
