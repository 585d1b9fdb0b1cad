//! Client configuration.
//!
//! Configuration is layered:
//! - Bundled defaults (include_str! from ideafeed.toml)
//! - User overrides (~/.config/ideafeed/ideafeed.toml, then ./ideafeed.toml)
//!
//! The API token is never read from files; it comes from [`TOKEN_ENV`].

use config::{Config, File, FileFormat};
use ideafeed_error::{ConfigError, IdeafeedError, IdeafeedResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "IDEAFEED_API_TOKEN";

/// Backend connection settings.
///
/// ```toml
/// [api]
/// base_url = "https://ideas.example.com/api/"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Carousel media settings.
///
/// ```toml
/// [media]
/// placeholder_base = "https://picsum.photos"
/// swipe_threshold = 50.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Base URL of the placeholder image service
    pub placeholder_base: String,

    /// Horizontal swipe distance that counts as navigation
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
}

fn default_swipe_threshold() -> f64 {
    50.0
}

/// Top-level Ideafeed configuration.
///
/// # Example
///
/// ```no_run
/// use ideafeed_client::IdeafeedConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = IdeafeedConfig::load()?;
/// println!("Backend: {}", config.api.base_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IdeafeedConfig {
    /// Backend connection settings
    pub api: ApiConfig,

    /// Carousel media settings
    pub media: MediaConfig,
}

impl IdeafeedConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> IdeafeedResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                IdeafeedError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                IdeafeedError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> IdeafeedResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../ideafeed.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/ideafeed/ideafeed.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("ideafeed").required(false));

        builder
            .build()
            .map_err(|e| {
                IdeafeedError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                IdeafeedError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bearer token from the environment, if set and non-blank.
    pub fn api_token() -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}
