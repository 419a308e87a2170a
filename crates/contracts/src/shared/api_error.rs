//! Error type for every call the frontend makes against the API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many characters of a non-JSON error body are kept in the message
pub const ERROR_BODY_PREVIEW: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// The request never produced a response (server down, CORS, DNS...)
    #[error("Cannot connect to server. Is the API running? ({0})")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded into the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// JSON bodies contribute their `message` field; anything else is
    /// reported as a short preview of the raw body.
    pub fn from_response(status: u16, content_type: Option<&str>, body: &str) -> Self {
        let is_json = content_type
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let message = if is_json {
            serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Error {}", status))
        } else {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            format!("Server Error ({}): {}", status, preview)
        };

        ApiError::Http { status, message }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Short heading for the error panel
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Connection Issue",
            ApiError::Http { .. } => "Server Error",
            ApiError::Decode(_) => "Unexpected Response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_message_is_extracted() {
        let err = ApiError::from_response(
            409,
            Some("application/json; charset=utf-8"),
            r#"{"message":"National ID already registered"}"#,
        );
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                message: "National ID already registered".into()
            }
        );
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_json_without_message_falls_back_to_status() {
        let err = ApiError::from_response(500, Some("application/json"), r#"{"error":true}"#);
        assert_eq!(err.to_string(), "Error 500");

        let err = ApiError::from_response(502, Some("application/json"), "not json");
        assert_eq!(err.to_string(), "Error 502");
    }

    #[test]
    fn test_text_body_is_truncated() {
        let body = "x".repeat(120);
        let err = ApiError::from_response(503, Some("text/html"), &body);
        assert_eq!(err.to_string(), format!("Server Error (503): {}", "x".repeat(50)));

        let err = ApiError::from_response(404, None, "Not Found");
        assert_eq!(err.to_string(), "Server Error (404): Not Found");
    }

    #[test]
    fn test_titles() {
        assert_eq!(ApiError::Network("refused".into()).title(), "Connection Issue");
        assert_eq!(ApiError::Decode("eof".into()).status(), None);
    }
}
