//! HTTP access to the Ideafeed backend.
//!
//! - [`IdeafeedConfig`] loads bundled defaults plus user overrides
//! - [`HttpIdeaClient`] implements the file and idea endpoints
//! - [`HttpMediaLoader`] downloads and decodes attachment media

#![warn(missing_docs)]

mod config;
mod dto;
mod http;
mod loader;

pub use config::{ApiConfig, IdeafeedConfig, MediaConfig, TOKEN_ENV};
pub use http::HttpIdeaClient;
pub use loader::HttpMediaLoader;
