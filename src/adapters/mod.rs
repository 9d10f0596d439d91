// Adapters layer: concrete implementations of the domain ports.

pub mod client;
pub mod fetch;

pub use crate::domain::ports::TracingAnnouncer;
pub use client::ClientAdapter;
pub use fetch::FetchAdapter;

use crate::domain::ports::{ConfigProvider, HttpAdapter, TransportKind};
use crate::utils::error::{PokeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Either transport, chosen from configuration at runtime.
#[derive(Debug, Clone)]
pub enum ConfiguredAdapter {
    Fetch(FetchAdapter),
    Client(ClientAdapter),
}

impl ConfiguredAdapter {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| PokeError::ConfigError {
                message: format!("could not build HTTP client: {}", describe(&e)),
            })?;

        tracing::debug!("Using {} transport", config.transport());

        Ok(match config.transport() {
            TransportKind::Fetch => Self::Fetch(FetchAdapter::with_client(client)),
            TransportKind::Client => Self::Client(ClientAdapter::with_client(client)),
        })
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            Self::Fetch(_) => TransportKind::Fetch,
            Self::Client(_) => TransportKind::Client,
        }
    }
}

#[async_trait]
impl HttpAdapter for ConfiguredAdapter {
    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        match self {
            Self::Fetch(adapter) => adapter.get(url).await,
            Self::Client(adapter) => adapter.get(url).await,
        }
    }
}

// reqwest's Display hides the underlying cause (e.g. the serde message).
pub(crate) fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
