/*
[INPUT]:  Error sources (transport, request encoding, response decoding, remote API)
[OUTPUT]: Structured error types with status and error-code accessors
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::path::PathBuf;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for the SOLAPI adapter
#[derive(Error, Debug)]
pub enum SolapiError {
    /// Connection, TLS or body read failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request payload could not be encoded as JSON
    #[error("Failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Request could not be assembled (e.g. query parameters not URL-encodable)
    #[error("Failed to encode request: {0}")]
    Encoding(#[source] reqwest::Error),

    /// Response body could not be decoded
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// API returned an error response
    #[error("{code}[{status}]:{message}")]
    Api {
        code: String,
        message: String,
        status: u16,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local file could not be read for upload
    #[error("Failed to read file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error body returned by the API on any non-200 status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
}

impl SolapiError {
    /// HTTP status associated with the error, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            SolapiError::Api { status, .. } | SolapiError::Decode { status, .. } => Some(*status),
            SolapiError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server reported the failure
    pub fn is_api_error(&self) -> bool {
        matches!(self, SolapiError::Api { .. })
    }

    /// Remote error code (e.g. `ValidationError`) if the server reported one
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SolapiError::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Create an API error from status code and decoded error body
    pub fn api_error(status: StatusCode, body: ApiErrorBody) -> Self {
        SolapiError::Api {
            code: body.error_code,
            message: body.error_message,
            status: status.as_u16(),
        }
    }

    /// Build the error for a non-200 response body.
    ///
    /// An undecodable body yields `Decode` and keeps the original status.
    pub fn from_error_body(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => Self::api_error(status, parsed),
            Err(source) => SolapiError::Decode {
                status: status.as_u16(),
                source,
            },
        }
    }
}

/// Result type alias for SOLAPI operations
pub type Result<T> = std::result::Result<T, SolapiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = SolapiError::from_error_body(
            StatusCode::BAD_REQUEST,
            br#"{"errorCode":"BadRequest","errorMessage":"bad"}"#,
        );
        match err {
            SolapiError::Api {
                ref code,
                ref message,
                status,
            } => {
                assert_eq!(code, "BadRequest");
                assert_eq!(message, "bad");
                assert_eq!(status, 400);
            }
            _ => panic!("Expected Api error variant"),
        }
        assert!(err.is_api_error());
        assert_eq!(err.api_code(), Some("BadRequest"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_api_error_display_matches_wire_format() {
        let err = SolapiError::Api {
            code: "NotFound".to_string(),
            message: "no such file".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "NotFound[404]:no such file");
    }

    #[test]
    fn test_undecodable_error_body_keeps_status() {
        let err = SolapiError::from_error_body(StatusCode::BAD_GATEWAY, b"<html>gateway</html>");
        assert!(matches!(err, SolapiError::Decode { status: 502, .. }));
        assert!(!err.is_api_error());
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_error_body_without_message() {
        let err =
            SolapiError::from_error_body(StatusCode::FORBIDDEN, br#"{"errorCode":"Forbidden"}"#);
        match err {
            SolapiError::Api {
                code,
                message,
                status,
            } => {
                assert_eq!(code, "Forbidden");
                assert!(message.is_empty());
                assert_eq!(status, 403);
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_error_body_without_code_is_decode_error() {
        let err =
            SolapiError::from_error_body(StatusCode::BAD_REQUEST, br#"{"errorMessage":"bad"}"#);
        assert!(matches!(err, SolapiError::Decode { status: 400, .. }));
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = SolapiError::Config("bad key".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.api_code(), None);
    }
}
