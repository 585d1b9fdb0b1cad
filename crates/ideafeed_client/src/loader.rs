//! Attachment media download and decode.

use async_trait::async_trait;
use crate::ApiConfig;
use ideafeed_core::MediaKind;
use ideafeed_error::{HttpError, IdeafeedResult, MediaError, MediaErrorKind};
use ideafeed_interface::{LoadedMedia, MediaLoader};
use reqwest::{Client, header::CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, instrument};

/// Downloads attachment media and confirms it decodes.
///
/// Images are fully decoded; other media count as loaded once the whole
/// body arrived with a success status. Every request is bounded by the
/// configured timeout, so a silent media host fails the preload instead of
/// holding the carousel in its loading state.
#[derive(Debug, Clone)]
pub struct HttpMediaLoader {
    client: Client,
}

impl HttpMediaLoader {
    /// Create a loader whose requests time out after `config.timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &ApiConfig) -> IdeafeedResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a loader sharing an existing reqwest client.
    ///
    /// The client's own timeout applies.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaLoader for HttpMediaLoader {
    #[instrument(skip(self))]
    async fn load(&self, url: &str) -> IdeafeedResult<LoadedMedia> {
        let download_error = |reason: String| {
            MediaError::new(MediaErrorKind::Download {
                url: url.to_string(),
                reason,
            })
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(download_error(format!("status {}", status.as_u16())).into());
        }

        let declared = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(MediaKind::from_content_type);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| download_error(e.to_string()))?;

        let media = decode(url, declared, bytes.to_vec()).await?;
        debug!(kind = %media.kind(), size = media.size(), "Media loaded");
        Ok(media)
    }
}

/// Confirm a downloaded body is usable media.
async fn decode(url: &str, declared: Option<MediaKind>, bytes: Vec<u8>) -> IdeafeedResult<LoadedMedia> {
    let decode_error = |reason: String| {
        MediaError::new(MediaErrorKind::Decode {
            url: url.to_string(),
            reason,
        })
    };

    if bytes.is_empty() {
        return Err(decode_error("empty body".to_string()).into());
    }

    let sniffed_image = image::guess_format(&bytes).is_ok();
    let kind = match declared {
        Some(MediaKind::Image) => MediaKind::Image,
        Some(MediaKind::Other) | None if sniffed_image => MediaKind::Image,
        Some(kind) => kind,
        None => MediaKind::Other,
    };

    if kind != MediaKind::Image {
        return Ok(LoadedMedia::new(kind, bytes.len(), None));
    }

    let size = bytes.len();
    let dimensions = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes).map(|img| (img.width(), img.height()))
    })
    .await
    .map_err(|e| decode_error(e.to_string()))?
    .map_err(|e| decode_error(e.to_string()))?;

    Ok(LoadedMedia::new(MediaKind::Image, size, Some(dimensions)))
}
