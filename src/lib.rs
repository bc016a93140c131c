//! Convention-driven REST controller mounting for axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                 restmount                     │
//!                  │                                               │
//!   controllers    │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────▶│  │  http   │──▶│ routing  │──▶│   axum    │  │
//!   (startup)      │  │ server  │   │ register │   │  Router   │  │
//!                  │  └─────────┘   └────┬─────┘   └───────────┘  │
//!                  │                     │                         │
//!                  │          ┌──────────┴──────────┐              │
//!                  │          ▼                     ▼              │
//!                  │  ┌──────────────┐      ┌──────────────┐      │
//!   request        │  │   recover    │      │   routing    │      │
//!   ──────────────▶│  │ panic guard  │      │ key/resolver │      │
//!   (runtime)      │  └──────┬───────┘      └──────────────┘      │
//!                  │         ▼                                     │
//!                  │  ┌──────────────┐   ┌────────────────────┐   │
//!   response       │  │    http      │   │  Cross-Cutting      │  │
//!   ◀──────────────│  │  envelope    │   │  config / logging   │  │
//!                  │  └──────────────┘   └────────────────────┘   │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! A controller named `UserController` is mounted at `/user` with all
//! seven HTTP verbs; its custom mapping (`"GET:profile"`) adds routes
//! under `/user/profile`. Every handler runs inside a panic guard that
//! turns an unrecovered failure into a generic server-error envelope.

// Core subsystems
pub mod config;
pub mod controller;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod observability;
pub mod recover;

pub use config::{load_config, ConfigError, CorsConfig, ServerConfig};
pub use controller::{handler, Controller, HandlerFuture, RouteHandler, RouteMap};
pub use http::response::{Envelope, ResponseCode};
pub use http::AppBuilder;
pub use observability::{ErrorSink, TracingSink};
pub use recover::Recovery;
pub use routing::{compose_key, parse_key, ControllerRegistry, RoutingError};
