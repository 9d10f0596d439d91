use crate::core::pokemon::{DEFAULT_API_BASE_URL, DEFAULT_COLLECTION, DEFAULT_IMAGE_BASE_URL};
use crate::domain::ports::{ConfigProvider, TransportKind};
use crate::utils::error::{PokeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_USER_AGENT: &str = concat!("pokeapi-adapter/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub collection: String,
    pub image_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub transport: TransportKind,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PokeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PokeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_url("api.image_base_url", &self.api.image_base_url)?;
        validation::validate_path_segment("api.collection", &self.api.collection)?;
        validation::validate_non_empty_string("http.user_agent", &self.http.user_agent)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn collection(&self) -> &str {
        &self.api.collection
    }

    fn image_base_url(&self) -> &str {
        &self.api.image_base_url
    }

    fn transport(&self) -> TransportKind {
        self.http.transport
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[api]
base_url = "http://localhost:8000/api/v2"
collection = "pokemon"
image_base_url = "http://localhost:8000/sprites"

[http]
transport = "client"
user_agent = "trainer-red/1.0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_base_url(), "http://localhost:8000/api/v2");
        assert_eq!(config.image_base_url(), "http://localhost:8000/sprites");
        assert_eq!(config.transport(), TransportKind::Client);
        assert_eq!(config.user_agent(), "trainer-red/1.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[http]\ntransport = \"fetch\"\n").unwrap();

        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.api_base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(config.collection(), "pokemon");
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(TomlConfig::from_toml_str("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("POKEAPI_ADAPTER_TEST_BASE", "https://mirror.example.com/api/v2");

        let toml_content = r#"
[api]
base_url = "${POKEAPI_ADAPTER_TEST_BASE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://mirror.example.com/api/v2");

        std::env::remove_var("POKEAPI_ADAPTER_TEST_BASE");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place_and_fails_validation() {
        let toml_content = r#"
[api]
base_url = "${POKEAPI_ADAPTER_TEST_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "${POKEAPI_ADAPTER_TEST_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_transport_is_parse_error() {
        let result = TomlConfig::from_toml_str("[http]\ntransport = \"carrier-pigeon\"\n");

        match result {
            Err(PokeError::ConfigValidationError { field, .. }) => assert_eq!(field, "toml_parsing"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = TomlConfig::default();
        config.api.collection = "pokemon/4".to_string();
        assert!(config.validate().is_err());

        let mut config = TomlConfig::default();
        config.api.image_base_url = "file:///tmp".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\ncollection = \"pokemon-form\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.collection(), "pokemon-form");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/pokeapi.toml");
        assert!(matches!(result, Err(PokeError::IoError(_))));
    }
}
