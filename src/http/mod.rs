//! HTTP surface of the crate.
//!
//! # Data Flow
//! ```text
//! AppBuilder (server.rs)
//!     → registration engine mounts controller groups
//!     → request.rs helpers read query parameters inside handlers
//!     → response.rs shapes every handler outcome as one envelope
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use response::{Envelope, ResponseCode};
pub use server::AppBuilder;
