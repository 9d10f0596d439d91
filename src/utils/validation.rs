use crate::utils::error::{PokeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PokeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Path segments are interpolated into request URLs, so they may not carry separators.
pub fn validate_path_segment(field_name: &str, segment: &str) -> Result<()> {
    validate_non_empty_string(field_name, segment)?;

    if segment.contains('/') || segment.contains('?') || segment.contains('#') {
        return Err(PokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: segment.to_string(),
            reason: "Path segment cannot contain '/', '?' or '#'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base_url", "https://pokeapi.co/api/v2").is_ok());
        assert!(validate_url("api_base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api_base_url", "").is_err());
        assert!(validate_url("api_base_url", "pokeapi.co").is_err());
        assert!(validate_url("api_base_url", "ftp://pokeapi.co").is_err());
    }

    #[test]
    fn test_validate_path_segment() {
        assert!(validate_path_segment("collection", "pokemon").is_ok());
        assert!(validate_path_segment("collection", "pokemon/4").is_err());
        assert!(validate_path_segment("collection", "  ").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user_agent", "pokeapi-adapter/0.1").is_ok());
        match validate_non_empty_string("user_agent", "\t") {
            Err(PokeError::InvalidConfigValueError { field, .. }) => assert_eq!(field, "user_agent"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
