use super::TomlConfig;
use crate::domain::ports::TransportKind;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pokeapi-adapter")]
#[command(about = "Fetch a Pokémon's moves through a pluggable HTTP transport")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    #[arg(long, default_value = "4")]
    pub id: i64,

    #[arg(long, default_value = "Charmander")]
    pub name: String,

    #[arg(long, value_enum, help = "Transport to use [default: fetch]")]
    pub transport: Option<TransportKind>,

    #[arg(long, help = "TOML file with [api] and [http] sections")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long)]
    pub collection: Option<String>,

    #[arg(long)]
    pub image_base_url: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads `--config` when given, then lets explicit flags override the file.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let base = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.merge_into(base))
    }

    pub fn merge_into(&self, mut config: TomlConfig) -> TomlConfig {
        if let Some(base_url) = &self.api_base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(collection) = &self.collection {
            config.api.collection = collection.clone();
        }
        if let Some(image_base_url) = &self.image_base_url {
            config.api.image_base_url = image_base_url.clone();
        }
        if let Some(transport) = self.transport {
            config.http.transport = transport;
        }
        if let Some(user_agent) = &self.user_agent {
            config.http.user_agent = user_agent.clone();
        }
        config
    }
}
