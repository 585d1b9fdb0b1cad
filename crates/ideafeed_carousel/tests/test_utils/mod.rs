//! Test utilities for carousel tests.
//!
//! Mock implementations of the attachment endpoints and the media loader.

#![allow(dead_code)]

use async_trait::async_trait;
use ideafeed_core::{AttachmentKey, LocalFile, MediaKind};
use ideafeed_error::{HttpError, IdeafeedResult, MediaError, MediaErrorKind};
use ideafeed_interface::{AttachmentApi, LoadedMedia, MediaLoader};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted answer for one key lookup.
#[derive(Debug, Clone)]
pub enum Lookup {
    Url(String),
    Empty,
    Fail,
}

/// Attachment API answering lookups from a script.
#[derive(Debug, Default)]
pub struct MockAttachmentApi {
    lookups: HashMap<String, Lookup>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockAttachmentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// `key` resolves to `https://cdn.test/{key}`.
    pub fn with_url(mut self, key: &str) -> Self {
        self.lookups
            .insert(key.to_string(), Lookup::Url(format!("https://cdn.test/{}", key)));
        self
    }

    pub fn with_lookup(mut self, key: &str, lookup: Lookup) -> Self {
        self.lookups.insert(key.to_string(), lookup);
        self
    }

    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttachmentApi for MockAttachmentApi {
    async fn file_url(&self, key: &AttachmentKey) -> IdeafeedResult<Option<String>> {
        self.calls.lock().push(key.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(key.as_str())
            .copied()
            .unwrap_or(Duration::from_millis(10));
        tokio::time::sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.lookups.get(key.as_str()) {
            Some(Lookup::Url(url)) => Ok(Some(url.clone())),
            Some(Lookup::Empty) => Ok(None),
            Some(Lookup::Fail) | None => Err(HttpError::with_status(404, "not found").into()),
        }
    }

    async fn upload_file(&self, _file: &LocalFile) -> IdeafeedResult<Option<AttachmentKey>> {
        Err(HttpError::new("uploads are not scripted in carousel tests").into())
    }
}

/// Media loader that succeeds unless the URL is marked broken.
#[derive(Debug, Default)]
pub struct MockMediaLoader {
    broken: HashSet<String>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockMediaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_broken(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl MediaLoader for MockMediaLoader {
    async fn load(&self, url: &str) -> IdeafeedResult<LoadedMedia> {
        self.calls.lock().push(url.to_string());
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        if self.broken.contains(url) {
            return Err(MediaError::new(MediaErrorKind::Decode {
                url: url.to_string(),
                reason: "corrupt".to_string(),
            })
            .into());
        }
        Ok(LoadedMedia::new(MediaKind::Image, 16, Some((4, 4))))
    }
}

pub fn keys(raw: &[&str]) -> Vec<AttachmentKey> {
    raw.iter().map(|k| AttachmentKey::from(*k)).collect()
}
