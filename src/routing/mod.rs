//! Convention-driven route derivation.
//!
//! # Data Flow
//! ```text
//! controllers
//!     → resolver.rs (type label → URL segment)
//!     → register.rs (default verbs + decoded custom routes)
//!     → key.rs (decode "METHOD:subpath" tokens)
//!     → axum Router (route table mutation)
//! ```
//!
//! # Design Decisions
//! - Registration runs once at startup, single-threaded, before serving
//! - Configuration errors abort registration; there is no safe partial
//!   route table to continue from
//! - The axum router is the collision authority: a duplicate
//!   (method, path) registration panics at startup

use thiserror::Error;

pub mod key;
pub mod register;
pub mod resolver;

pub use key::{compose_key, parse_key, KEY_SEPARATOR};
pub use register::ControllerRegistry;
pub use resolver::{resolve_name, CONTROLLER_SUFFIX};

/// Configuration errors surfaced while deriving routes.
///
/// All of these are programmer errors in controller naming or mapping
/// declarations; the public mount surface converts them into panics.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Controller type name does not follow the naming convention.
    #[error("controller name `{name}` must end with `Controller` and have content before it")]
    InvalidControllerName { name: String },

    /// Route key is shorter than the shortest well-formed key.
    #[error("route key `{key}` is too short")]
    KeyTooShort { key: String },

    /// Route key has no method/path separator.
    #[error("route key `{key}` is missing the `:` separator")]
    KeyMissingSeparator { key: String },
}
