//! Asset retrieval over plain GET.

use async_trait::async_trait;
use iconsmith_core::{AssetFetchPort, AssetRetrievalError, RetrievedAsset};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// Fetches icon bytes with default headers and no authentication.
#[derive(Debug, Clone, Default)]
pub struct ReqwestAssetFetcher {
    client: reqwest::Client,
}

impl ReqwestAssetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing client (connection pool).
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetFetchPort for ReqwestAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<RetrievedAsset, AssetRetrievalError> {
        let parsed = Url::parse(url).map_err(|_| AssetRetrievalError::InvalidUrl {
            url: url.to_string(),
        })?;

        let network = |err: reqwest::Error| AssetRetrievalError::Network {
            url: url.to_string(),
            message: err.to_string(),
        };

        let response = self.client.get(parsed).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetRetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let bytes = response.bytes().await.map_err(network)?;
        debug!(%url, len = bytes.len(), content_type = ?content_type, "Fetched asset");

        Ok(RetrievedAsset::new(bytes, content_type))
    }
}
