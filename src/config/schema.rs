//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files;
//! every field has a default so a minimal (or empty) config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for a mounted server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Production mode: quieter logging defaults.
    pub production: bool,

    /// CORS settings.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            production: false,
            cors: CorsConfig::default(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// Whether the CORS layer is applied at all.
    pub enabled: bool,

    /// Allowed origins. Empty (or containing "*") mirrors the request
    /// origin, the allow-all behavior compatible with credentials.
    pub allow_origins: Vec<String>,

    /// Extra allowed request headers. Empty mirrors the request.
    pub allow_headers: Vec<String>,
}
