//! Error types for the Ideafeed client.
//!
//! This crate provides the foundation error types used throughout the Ideafeed workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use ideafeed_error::{HttpError, IdeafeedResult};
//!
//! fn fetch_ideas() -> IdeafeedResult<Vec<String>> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_ideas().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod http;
mod json;
mod media;
mod upload;
mod validation;

pub use config::ConfigError;
pub use error::{IdeafeedError, IdeafeedErrorKind, IdeafeedResult};
pub use file::{LocalFileError, LocalFileErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use media::{MediaError, MediaErrorKind, MediaResult};
pub use upload::{UploadError, UploadErrorKind, UploadResult};
pub use validation::{DraftField, ValidationError};
