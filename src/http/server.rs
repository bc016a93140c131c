//! Server bootstrap.
//!
//! # Responsibilities
//! - Assemble the axum Router from named controller groups
//! - Wire request tracing and optional CORS
//! - Bind and serve with graceful shutdown
//!
//! # Design Decisions
//! - Registration happens exactly once inside `build()`, before the
//!   listener accepts its first connection
//! - CORS allows credentials; an allow-all origin list is expressed by
//!   mirroring the request origin
//! - TLS, connection handling, and timeouts stay with the transport

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{CorsConfig, ServerConfig};
use crate::controller::Controller;
use crate::observability::ErrorSink;
use crate::routing::ControllerRegistry;

/// Assembles a router from controller groups and runs it.
///
/// ```rust,no_run
/// # use restmount::{AppBuilder, Controller, TracingSink};
/// # use std::sync::Arc;
/// # struct PingController;
/// # impl Controller for PingController {}
/// # async fn run() -> std::io::Result<()> {
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
/// AppBuilder::new()
///     .error_sink(Arc::new(TracingSink))
///     .group("api", vec![Arc::new(PingController)])
///     .serve(listener)
///     .await
/// # }
/// ```
#[derive(Default)]
pub struct AppBuilder {
    production: bool,
    cors: Option<CorsConfig>,
    sink: Option<Arc<dyn ErrorSink>>,
    groups: Vec<(String, Vec<Arc<dyn Controller>>)>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-set from a loaded [`ServerConfig`].
    pub fn from_config(config: &ServerConfig) -> Self {
        let mut builder = Self::new().production(config.production);
        if config.cors.enabled {
            builder = builder.cors(config.cors.clone());
        }
        builder
    }

    /// Toggle production mode (affects log verbosity defaults only).
    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Enable CORS with the given settings.
    pub fn cors(mut self, cors: CorsConfig) -> Self {
        self.cors = Some(cors);
        self
    }

    /// Forward recovered handler panics to `sink`.
    pub fn error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Mount controllers at the router root.
    pub fn controllers(self, controllers: Vec<Arc<dyn Controller>>) -> Self {
        self.group("/", controllers)
    }

    /// Mount controllers under a base path (normalized to lead with `/`).
    pub fn group(mut self, base: impl Into<String>, controllers: Vec<Arc<dyn Controller>>) -> Self {
        self.groups.push((base.into(), controllers));
        self
    }

    /// Whether production mode was requested.
    pub fn is_production(&self) -> bool {
        self.production
    }

    /// Assemble the router: mount every group, then layer CORS and
    /// request tracing.
    ///
    /// # Panics
    ///
    /// Panics on controller misconfiguration; see
    /// [`ControllerRegistry::mount`].
    pub fn build(self) -> Router {
        let registry = match self.sink {
            Some(sink) => ControllerRegistry::with_error_sink(sink),
            None => ControllerRegistry::new(),
        };

        let mut router = registry.mount_groups(Router::new(), self.groups);

        if let Some(cors) = &self.cors {
            router = router.layer(cors_layer(cors));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Build the router and serve it on `listener` until Ctrl+C.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        let router = self.build();

        tracing::info!(address = %addr, "server starting");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Translate [`CorsConfig`] into a tower-http layer.
///
/// Credentials are always allowed, so an allow-all origin list cannot
/// use the wildcard header; it mirrors the request origin instead.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter(|origin| *origin != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins)
    };

    let allow_headers = if config.allow_headers.is_empty() {
        AllowHeaders::mirror_request()
    } else {
        AllowHeaders::list(
            config
                .allow_headers
                .iter()
                .filter_map(|header| header.parse::<HeaderName>().ok()),
        )
    };

    CorsLayer::new()
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_origin(allow_origin)
        .allow_headers(allow_headers)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
