//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address and CORS header/origin values
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("cors.allow_origins entry `{0}` is not a valid header value")]
    InvalidCorsOrigin(String),

    #[error("cors.allow_headers entry `{0}` is not a valid header name")]
    InvalidCorsHeader(String),
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.bind_address.clone(),
        ));
    }

    for origin in &config.cors.allow_origins {
        if origin != "*" && origin.parse::<axum::http::HeaderValue>().is_err() {
            errors.push(ValidationError::InvalidCorsOrigin(origin.clone()));
        }
    }

    for header in &config.cors.allow_headers {
        if header.parse::<axum::http::HeaderName>().is_err() {
            errors.push(ValidationError::InvalidCorsHeader(header.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ServerConfig::default();
        config.bind_address = "not-an-address".to_string();
        config.cors.allow_origins = vec!["bad\norigin".to_string()];
        config.cors.allow_headers = vec!["bad header".to_string()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_wildcard_origin_is_accepted() {
        let mut config = ServerConfig::default();
        config.cors.allow_origins = vec!["*".to_string()];
        assert!(validate_config(&config).is_ok());
    }
}
