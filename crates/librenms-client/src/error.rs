//! LibreNMS client errors

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the LibreNMS API
#[derive(Debug, Error)]
pub enum LibreNmsError {
    /// HTTP transport error (connection refused, TLS failure, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// LibreNMS answered with a non-2xx status.
    ///
    /// `message` is the `message` field of the error envelope, or the raw
    /// response body when the body is not a JSON envelope.
    #[error("LibreNMS API error ({status}): {message}")]
    Api {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Decoded or raw error message
        message: String,
    },

    /// A 2xx response body could not be decoded into the expected type
    #[error("failure decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    /// JSON serialization error while encoding a request body
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The base URL is not of the form `http[s]://<host>[:port]/`
    #[error("invalid base URL format, expected: 'http[s]://<host>[:port]/': {0}")]
    InvalidBaseUrl(String),

    /// A relative path could not be joined onto the API root
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid request (e.g., missing required fields)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or malformed client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LibreNmsError {
    /// HTTP status of a remote error, if this error came from the server.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// True when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
