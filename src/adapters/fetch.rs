use super::describe;
use crate::domain::ports::HttpAdapter;
use crate::utils::error::{PokeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Reads the response body chunk by chunk off the connection and decodes it
/// with `serde_json` once the stream is drained.
#[derive(Debug, Clone, Default)]
pub struct FetchAdapter {
    client: Client,
}

impl FetchAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpAdapter for FetchAdapter {
    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        tracing::debug!("Fetching {}", url);
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PokeError::transport(url, describe(&e)))?;

        let status = response.status();
        tracing::debug!("Fetch response status: {}", status);
        if !status.is_success() {
            return Err(PokeError::status(url, status.as_u16()));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| PokeError::transport(url, describe(&e)))?
        {
            body.extend_from_slice(&chunk);
        }
        tracing::debug!("Read {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| PokeError::decode(url, e.to_string()))
    }
}
