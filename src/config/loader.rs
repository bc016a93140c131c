//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_gets_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(!config.production);
        assert!(!config.cors.enabled);
    }

    #[test]
    fn test_full_toml_round_trip() {
        let raw = r#"
            bind_address = "127.0.0.1:9000"
            production = true

            [cors]
            enabled = true
            allow_origins = ["http://app.test"]
            allow_headers = ["x-token"]
        "#;
        let config: ServerConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert!(config.production);
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allow_origins, vec!["http://app.test"]);
        assert_eq!(config.cors.allow_headers, vec!["x-token"]);
    }
}
