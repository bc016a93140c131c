//! Panic recovery boundary.
//!
//! # Responsibilities
//! - Contain panics raised during handler execution
//! - Capture a bounded backtrace and forward it to the error sink
//! - Answer with the generic server-error envelope in place of output
//!   the handler might have partially produced
//!
//! # Design Decisions
//! - Recovery is a last-resort boundary for bugs (index out of bounds,
//!   unwrap on None); expected failures belong in handler return values
//! - The guard is transparent for handlers that complete normally
//! - Nothing about the underlying failure reaches the client

use std::any::Any;
use std::backtrace::Backtrace;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use futures_util::FutureExt;

use crate::http::response::Envelope;
use crate::observability::ErrorSink;

/// Upper bound on captured trace text, in bytes.
pub const TRACE_LIMIT: usize = 800;

/// Per-invocation panic guard shared by every registered handler.
///
/// Cloning is cheap; all clones forward to the same sink. The sink is
/// fixed at construction and cannot be swapped while the server is
/// live.
#[derive(Clone, Default)]
pub struct Recovery {
    sink: Option<Arc<dyn ErrorSink>>,
}

impl Recovery {
    /// Guard without a sink; recovered panics are swallowed unlogged.
    pub fn new() -> Self {
        Self { sink: None }
    }

    /// Guard forwarding recovered panics to `sink`.
    pub fn with_sink(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Run a handler future inside a protected scope.
    ///
    /// If the handler panics, the panic is contained, logged through the
    /// sink (best-effort) with a trace capped at [`TRACE_LIMIT`] bytes,
    /// and the caller receives the generic server-error envelope.
    pub async fn guard<F>(&self, handler: F) -> Response
    where
        F: Future<Output = Response>,
    {
        match AssertUnwindSafe(handler).catch_unwind().await {
            Ok(response) => response,
            Err(payload) => {
                if let Some(sink) = &self.sink {
                    sink.write_error(&panic_message(payload.as_ref()), &capture_trace(), None);
                }
                Envelope::error("").into_response()
            }
        }
    }
}

/// Render the panic payload; `panic!` carries `&str` or `String`.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Capture the current backtrace, truncated to [`TRACE_LIMIT`] bytes.
fn capture_trace() -> String {
    let mut trace = Backtrace::force_capture().to_string();
    if trace.len() > TRACE_LIMIT {
        let mut end = TRACE_LIMIT;
        while !trace.is_char_boundary(end) {
            end -= 1;
        }
        trace.truncate(end);
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::ResponseCode;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubSink {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ErrorSink for StubSink {
        fn write_error(&self, error: &str, trace: &str, _context: Option<&str>) {
            self.calls
                .lock()
                .unwrap()
                .push((error.to_string(), trace.to_string()));
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn panicking(message: &'static str) -> Response {
        panic!("{message}")
    }

    #[tokio::test]
    async fn test_guard_is_transparent_on_success() {
        let recovery = Recovery::new();
        let response = recovery.guard(async { "fine".into_response() }).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_panic_becomes_server_error_envelope() {
        let recovery = Recovery::new();
        let response = recovery.guard(panicking("handler bug")).await;

        // Transport stays 200; the failure lives in the envelope code.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["code"], ResponseCode::ServerError.as_i16());
        assert_eq!(json["msg"], "system error occurred");
    }

    #[tokio::test]
    async fn test_sink_receives_exactly_one_call_with_trace() {
        let sink = Arc::new(StubSink::default());
        let recovery = Recovery::with_sink(sink.clone());

        let _ = recovery.guard(panicking("observed bug")).await;

        let calls = sink.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (error, trace) = &calls[0];
        assert_eq!(error, "observed bug");
        assert!(!trace.is_empty());
        assert!(trace.len() <= TRACE_LIMIT);
    }

    #[tokio::test]
    async fn test_missing_sink_swallows_silently() {
        let recovery = Recovery::new();
        let response = recovery.guard(panicking("unlogged")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_panic_message_renders_owned_strings() {
        let payload: Box<dyn Any + Send> = Box::new(format!("dynamic {}", 42));
        assert_eq!(panic_message(payload.as_ref()), "dynamic 42");
    }
}
