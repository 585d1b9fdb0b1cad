//! Test utilities for upload tests.
//!
//! A scripted backend standing in for the file and idea endpoints.

#![allow(dead_code)]

use async_trait::async_trait;
use ideafeed_core::{AttachmentKey, Idea, LocalFile, NewIdea};
use ideafeed_error::{HttpError, IdeafeedError, IdeafeedErrorKind, IdeafeedResult, UploadErrorKind};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Scripted answer for one upload.
#[derive(Debug, Clone)]
pub enum UploadScript {
    Key(String),
    NoKey,
    Fail,
}

/// Backend recording every call it receives.
///
/// Uploads succeed with key `k{name}` (lowercased) unless scripted otherwise.
#[derive(Debug, Default)]
pub struct MockBackend {
    uploads: HashMap<String, UploadScript>,
    upload_delay: Option<Duration>,
    create_fails: bool,
    upload_calls: Mutex<Vec<String>>,
    created: Mutex<Vec<NewIdea>>,
    create_calls: Mutex<usize>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload(mut self, name: &str, script: UploadScript) -> Self {
        self.uploads.insert(name.to_string(), script);
        self
    }

    pub fn with_upload_delay(mut self, delay: Duration) -> Self {
        self.upload_delay = Some(delay);
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.create_fails = true;
        self
    }

    pub fn upload_calls(&self) -> Vec<String> {
        self.upload_calls.lock().clone()
    }

    pub fn created(&self) -> Vec<NewIdea> {
        self.created.lock().clone()
    }

    pub fn create_calls(&self) -> usize {
        *self.create_calls.lock()
    }

    pub fn network_calls(&self) -> usize {
        self.upload_calls.lock().len() + self.create_calls()
    }
}

#[async_trait]
impl ideafeed_interface::AttachmentApi for MockBackend {
    async fn file_url(&self, _key: &AttachmentKey) -> IdeafeedResult<Option<String>> {
        Err(HttpError::new("lookups are not scripted in upload tests").into())
    }

    async fn upload_file(&self, file: &LocalFile) -> IdeafeedResult<Option<AttachmentKey>> {
        self.upload_calls.lock().push(file.name().clone());
        if let Some(delay) = self.upload_delay {
            tokio::time::sleep(delay).await;
        }
        match self.uploads.get(file.name()) {
            Some(UploadScript::Key(key)) => Ok(Some(AttachmentKey::from(key.as_str()))),
            Some(UploadScript::NoKey) => Ok(None),
            Some(UploadScript::Fail) => Err(HttpError::with_status(500, "storage unavailable").into()),
            None => Ok(Some(AttachmentKey::from(
                format!("k{}", file.name().to_lowercase()).as_str(),
            ))),
        }
    }
}

#[async_trait]
impl ideafeed_interface::IdeaApi for MockBackend {
    async fn create_idea(&self, idea: &NewIdea) -> IdeafeedResult<()> {
        *self.create_calls.lock() += 1;
        if self.create_fails {
            return Err(HttpError::with_status(500, "database unavailable").into());
        }
        self.created.lock().push(idea.clone());
        Ok(())
    }

    async fn related_ideas(&self) -> IdeafeedResult<Vec<Idea>> {
        Ok(Vec::new())
    }
}

pub fn file(name: &str) -> LocalFile {
    LocalFile::builder()
        .name(name)
        .content_type("image/png")
        .bytes(vec![7u8; 32])
        .build()
        .expect("valid test file")
}

pub fn files(names: &[&str]) -> Vec<LocalFile> {
    names.iter().map(|n| file(n)).collect()
}

/// Upload error kind carried by `err`, if any.
pub fn upload_kind(err: &IdeafeedError) -> Option<UploadErrorKind> {
    match err.kind() {
        IdeafeedErrorKind::Upload(e) => Some(e.kind().clone()),
        _ => None,
    }
}
