//! Uniform response envelope.
//!
//! # Responsibilities
//! - Fix one JSON shape for every handler outcome: `{code, msg, data}`
//! - Keep transport status at 200; logical failure travels in `code`
//!
//! # Design Decisions
//! - `code` is a bare integer on the wire: 200 success, 400 client
//!   error, 500 server error, 0 other
//! - An empty error message is replaced by a generic fallback so the
//!   client never sees an empty `msg` on failure

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Substituted when an error is reported without a message.
pub const FALLBACK_ERROR_MESSAGE: &str = "system error occurred";

/// Logical outcome carried in the envelope `code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    ClientError,
    ServerError,
    Other,
}

impl ResponseCode {
    /// Wire value of the code.
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Success => 200,
            Self::ClientError => 400,
            Self::ServerError => 500,
            Self::Other => 0,
        }
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i16(self.as_i16())
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match i16::deserialize(deserializer)? {
            200 => Ok(Self::Success),
            400 => Ok(Self::ClientError),
            500 => Ok(Self::ServerError),
            0 => Ok(Self::Other),
            other => Err(D::Error::custom(format!("unknown response code {other}"))),
        }
    }
}

/// The fixed three-field response shape.
///
/// Immutable once constructed; exists only for the duration of one
/// response write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub code: ResponseCode,
    pub msg: String,
    pub data: serde_json::Value,
}

impl Envelope {
    /// Successful outcome wrapping `data`.
    ///
    /// A payload that cannot be serialized degrades to `null` rather
    /// than failing the response.
    pub fn success(data: impl Serialize) -> Self {
        Self {
            code: ResponseCode::Success,
            msg: String::new(),
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
        }
    }

    /// Server-error outcome with `msg` (or the fallback if empty).
    pub fn error(msg: &str) -> Self {
        Self::error_with_code(ResponseCode::ServerError, msg)
    }

    /// Error outcome with an explicit code.
    pub fn error_with_code(code: ResponseCode, msg: &str) -> Self {
        let msg = if msg.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            msg.to_string()
        };
        Self {
            code,
            msg,
            data: serde_json::Value::Null,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        // Transport status is always 200; only the envelope signals failure.
        Json(self).into_response()
    }
}

/// Respond with a success envelope.
pub fn success(data: impl Serialize) -> Response {
    Envelope::success(data).into_response()
}

/// Respond with a server-error envelope.
pub fn error(msg: &str) -> Response {
    Envelope::error(msg).into_response()
}

/// Respond with an error envelope under an explicit code.
pub fn error_with_code(code: ResponseCode, msg: &str) -> Response {
    Envelope::error_with_code(code, msg).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    async fn render(envelope: Envelope) -> (StatusCode, serde_json::Value) {
        let response = envelope.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_success_shape() {
        let (status, json) = render(Envelope::success(serde_json::json!({"id": 7}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["code"], 200);
        assert_eq!(json["msg"], "");
        assert_eq!(json["data"]["id"], 7);
    }

    #[tokio::test]
    async fn test_error_keeps_transport_200() {
        let (status, json) = render(Envelope::error("boom")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["code"], 500);
        assert_eq!(json["msg"], "boom");
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_empty_error_message_falls_back() {
        let (_, json) = render(Envelope::error("")).await;
        assert_eq!(json["msg"], FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_explicit_code_survives() {
        let (_, json) = render(Envelope::error_with_code(
            ResponseCode::ClientError,
            "bad page size",
        ))
        .await;
        assert_eq!(json["code"], 400);
        assert_eq!(json["msg"], "bad page size");
    }

    #[test]
    fn test_code_round_trips_through_serde() {
        for code in [
            ResponseCode::Success,
            ResponseCode::ClientError,
            ResponseCode::ServerError,
            ResponseCode::Other,
        ] {
            let wire = serde_json::to_string(&code).unwrap();
            let back: ResponseCode = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, code);
        }
        assert!(serde_json::from_str::<ResponseCode>("123").is_err());
    }
}
