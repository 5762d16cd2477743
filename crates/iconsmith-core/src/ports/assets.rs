//! Asset retrieval port.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Raw image content fetched from an asset URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedAsset {
    pub bytes: Bytes,
    /// `Content-Type` reported by the server, if any.
    pub content_type: Option<String>,
}

impl RetrievedAsset {
    pub fn new(bytes: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }
}

/// Retrieval of image bytes failed.
///
/// Never shown to the user; the exporter logs it and falls back to
/// viewing the asset instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetRetrievalError {
    #[error("asset request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("asset request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("invalid asset URL '{url}'")]
    InvalidUrl { url: String },
}

/// Plain GET of an asset URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetFetchPort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RetrievedAsset, AssetRetrievalError>;
}
