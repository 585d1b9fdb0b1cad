//! Backend REST client.

use crate::{
    ApiConfig, IdeafeedConfig,
    dto::{FileUrlResponse, IdeasResponse, UploadResponse},
};
use async_trait::async_trait;
use ideafeed_core::{AttachmentKey, Idea, LocalFile, NewIdea};
use ideafeed_error::{ConfigError, HttpError, IdeafeedResult, JsonError};
use ideafeed_interface::{AttachmentApi, IdeaApi};
use reqwest::{Client, RequestBuilder, Response, Url, multipart};
use std::time::Duration;
use tracing::{debug, instrument};

/// REST client for the file and idea endpoints.
///
/// # Example
/// ```no_run
/// use ideafeed_client::{HttpIdeaClient, IdeafeedConfig};
/// use ideafeed_interface::IdeaApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = IdeafeedConfig::load()?;
///     let client = HttpIdeaClient::new(&config.api, IdeafeedConfig::api_token())?;
///     let ideas = client.related_ideas().await?;
///     println!("{} ideas", ideas.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpIdeaClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpIdeaClient {
    /// Creates a client for `config.base_url`, authenticating with `token` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL does not parse or cannot carry path segments
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all, fields(base_url = %config.base_url, has_token = token.is_some()))]
    pub fn new(config: &ApiConfig, token: Option<String>) -> IdeafeedResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ConfigError::new(format!("Invalid api.base_url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::new(format!(
                "api.base_url '{}' cannot carry endpoint paths",
                config.base_url
            ))
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Creates a client from loaded configuration and the token environment variable.
    pub fn from_config(config: &IdeafeedConfig) -> IdeafeedResult<Self> {
        Self::new(&config.api, IdeafeedConfig::api_token())
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> IdeafeedResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::new("api.base_url cannot carry endpoint paths"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> IdeafeedResult<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(HttpError::with_status(status.as_u16(), error_text).into());
        }
        Ok(response)
    }
}

#[async_trait]
impl AttachmentApi for HttpIdeaClient {
    #[instrument(skip(self), fields(key = %key))]
    async fn file_url(&self, key: &AttachmentKey) -> IdeafeedResult<Option<String>> {
        let url = self.endpoint(&["files", key.as_str()])?;
        debug!(url = %url, "Looking up attachment URL");

        let body: FileUrlResponse = self
            .send(self.client.get(url))
            .await?
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Failed to parse file lookup: {}", e)))?;

        Ok(body.data.and_then(|data| data.url))
    }

    #[instrument(skip(self, file), fields(file = %file.name(), size = file.size()))]
    async fn upload_file(&self, file: &LocalFile) -> IdeafeedResult<Option<AttachmentKey>> {
        let url = self.endpoint(&["files", "upload"])?;

        let part = multipart::Part::bytes(file.bytes().clone())
            .file_name(file.name().clone())
            .mime_str(file.content_type())
            .map_err(|e| {
                HttpError::new(format!(
                    "Invalid content type '{}': {}",
                    file.content_type(),
                    e
                ))
            })?;
        let form = multipart::Form::new().part("file", part);

        debug!(url = %url, "Uploading file");
        let body: UploadResponse = self
            .send(self.client.post(url).multipart(form))
            .await?
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Failed to parse upload response: {}", e)))?;

        Ok(body.data.and_then(|data| data.key))
    }
}

#[async_trait]
impl IdeaApi for HttpIdeaClient {
    #[instrument(skip(self, idea), fields(title = %idea.title, documents = idea.supporting_documents.len()))]
    async fn create_idea(&self, idea: &NewIdea) -> IdeafeedResult<()> {
        let url = self.endpoint(&["ideas"])?;
        debug!(url = %url, "Creating idea");
        self.send(self.client.post(url).json(idea)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn related_ideas(&self) -> IdeafeedResult<Vec<Idea>> {
        let url = self.endpoint(&["ideas", "related"])?;
        debug!(url = %url, "Fetching related ideas");

        let body: IdeasResponse = self
            .send(self.client.get(url))
            .await?
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Failed to parse ideas: {}", e)))?;

        Ok(body.data.unwrap_or_default())
    }
}
