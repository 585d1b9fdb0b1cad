//! Core type definitions for the Ideafeed interface.

use derive_getters::Getters;
use ideafeed_core::MediaKind;
use serde::{Deserialize, Serialize};

/// Media that finished downloading and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct LoadedMedia {
    /// Category reported by the server or sniffed from the body
    kind: MediaKind,
    /// Body size in bytes
    size: usize,
    /// Pixel dimensions for images
    dimensions: Option<(u32, u32)>,
}

impl LoadedMedia {
    /// Create a loaded media record.
    pub fn new(kind: MediaKind, size: usize, dimensions: Option<(u32, u32)>) -> Self {
        Self {
            kind,
            size,
            dimensions,
        }
    }
}
