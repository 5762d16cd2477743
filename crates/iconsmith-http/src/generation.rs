//! Generation service client.

use async_trait::async_trait;
use iconsmith_core::{GeneratedIcon, GenerationFailure, GenerationPayload, IconGenerationPort};
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ConfigError;
use crate::wire::{classify_error, parse_success};

/// Calls `POST {base}/generate-icons`.
///
/// One request per call: no retries, and no deadline unless the config
/// sets one.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GenerationClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let endpoint = config.generate_endpoint()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl IconGenerationPort for GenerationClient {
    async fn generate(
        &self,
        payload: &GenerationPayload,
    ) -> Result<Vec<GeneratedIcon>, GenerationFailure> {
        debug!(endpoint = %self.endpoint, "POST generate-icons");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| GenerationFailure::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| GenerationFailure::transport(err.to_string()))?;
        debug!(status = status.as_u16(), len = body.len(), "Generation response received");

        if status.is_success() {
            parse_success(&body)
        } else {
            Err(classify_error(status, &body))
        }
    }
}
