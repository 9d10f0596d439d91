use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Issues a single GET against a fully-qualified URL and decodes the JSON body into `T`.
///
/// Implementations perform exactly one request per call, with no retries or caching.
/// Network and status failures surface as `PokeError::Transport`, payloads that do
/// not fit `T` as `PokeError::Decode`.
#[async_trait]
pub trait HttpAdapter: Send + Sync {
    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send;
}

#[async_trait]
impl<H: HttpAdapter> HttpAdapter for Arc<H> {
    async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        (**self).get(url).await
    }
}

/// Receives the lines a Pokémon says out loud.
pub trait Announcer: Send + Sync {
    fn announce(&self, line: &str);
}

/// Emits every announcement as an `info` event on the `pokeapi_adapter::voice` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnouncer;

impl Announcer for TracingAnnouncer {
    fn announce(&self, line: &str) {
        tracing::info!(target: "pokeapi_adapter::voice", "{}", line);
    }
}

/// Which `HttpAdapter` implementation to build at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Fetch,
    Client,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("fetch"),
            Self::Client => f.write_str("client"),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn collection(&self) -> &str;
    fn image_base_url(&self) -> &str;
    fn transport(&self) -> TransportKind;
    fn user_agent(&self) -> &str;
}
