use super::describe;
use crate::domain::ports::HttpAdapter;
use crate::utils::error::{PokeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Buffers the whole response through reqwest's `json()` helper.
///
/// Only `get` is backed by a request. `post`, `patch` and `delete` are part of
/// the surface but always answer `PokeError::Unsupported` without touching the
/// network.
#[derive(Debug, Clone, Default)]
pub struct ClientAdapter {
    client: Client,
}

impl ClientAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn post(&self, url: &str) -> Result<()> {
        Err(unsupported("POST", url))
    }

    pub async fn patch(&self, url: &str) -> Result<()> {
        Err(unsupported("PATCH", url))
    }

    pub async fn delete(&self, url: &str) -> Result<()> {
        Err(unsupported("DELETE", url))
    }
}

fn unsupported(method: &'static str, url: &str) -> PokeError {
    tracing::warn!("{} {} rejected: only GET is supported", method, url);
    PokeError::Unsupported { method }
}

fn map_reqwest_error(url: &str, error: reqwest::Error) -> PokeError {
    if error.is_decode() {
        PokeError::decode(url, describe(&error))
    } else if let Some(status) = error.status() {
        PokeError::status(url, status.as_u16())
    } else {
        PokeError::transport(url, describe(&error))
    }
}

#[async_trait]
impl HttpAdapter for ClientAdapter {
    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        tracing::debug!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;

        let status = response.status();
        tracing::debug!("Client response status: {}", status);
        // `error_for_status` lets unfollowed 3xx responses through.
        if !status.is_success() {
            return Err(PokeError::status(url, status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| map_reqwest_error(url, e))
    }
}
