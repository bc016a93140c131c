//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! recovery guard produces:
//!     → ErrorSink (panic message + bounded trace + optional context)
//!
//! Consumers:
//!     → TracingSink (default: tracing::error! events)
//!     → caller-supplied sinks (file, remote, test stubs)
//! ```
//!
//! # Design Decisions
//! - The sink is injected explicitly at construction; no process-global
//!   logger reference
//! - A missing sink disables error logging silently; logging is
//!   best-effort and never itself fatal

pub mod logging;

pub use logging::{init, ErrorSink, TracingSink};
