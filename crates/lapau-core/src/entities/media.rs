//! Media attachment descriptor
//!
//! The core never ingests files; it only stores already-encoded
//! descriptors handed over by the upload collaborator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Media attachment on a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    /// Poster frame, videos only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Media {
    /// Create an image descriptor
    pub fn image(id: Uuid, url: String) -> Self {
        Self {
            id,
            kind: MediaKind::Image,
            url,
            thumbnail: None,
        }
    }

    /// Create a video descriptor with its poster frame
    pub fn video(id: Uuid, url: String, thumbnail: Option<String>) -> Self {
        Self {
            id,
            kind: MediaKind::Video,
            url,
            thumbnail,
        }
    }
}
