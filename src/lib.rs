pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{ClientAdapter, ConfiguredAdapter, FetchAdapter, TracingAnnouncer};
pub use crate::core::{
    Announcer, ConfigProvider, Endpoints, HttpAdapter, Move, Pokemon, TransportKind,
};
pub use crate::utils::error::{PokeError, Result};
