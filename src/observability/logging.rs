//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Define the error sink consumed by the recovery guard
//! - Provide the default tracing-backed sink

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Destination for errors recovered from panicking handlers.
///
/// `error` is the rendered panic message, `trace` the captured (and
/// possibly truncated) backtrace text, `context` optional caller-supplied
/// detail. Implementations must tolerate concurrent calls; one request
/// equals at most one call.
pub trait ErrorSink: Send + Sync {
    /// Record a recovered handler failure.
    fn write_error(&self, error: &str, trace: &str, context: Option<&str>);

    /// Record an informational message.
    fn write_info(&self, message: &str) {
        let _ = message;
    }
}

/// Default sink: forwards recovered failures to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn write_error(&self, error: &str, trace: &str, context: Option<&str>) {
        match context {
            Some(context) => tracing::error!(trace, context, "handler panicked: {error}"),
            None => tracing::error!(trace, "handler panicked: {error}"),
        }
    }

    fn write_info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Install the global tracing subscriber.
///
/// Production mode defaults the filter to `info`, development to
/// `debug`; `RUST_LOG` overrides either. Call once at startup, before
/// mounting controllers.
pub fn init(production: bool) {
    let default_filter = if production {
        "restmount=info,tower_http=info"
    } else {
        "restmount=debug,tower_http=debug"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_accepts_all_shapes() {
        // Sink calls must never fail, with or without context.
        let sink = TracingSink;
        sink.write_error("boom", "trace text", None);
        sink.write_error("boom", "trace text", Some("request context"));
        sink.write_info("startup complete");
    }
}
