//! Error types for the PokeAPI client.
//!
//! # Design
//! Three failure classes cover every call: the request never completed
//! (`TransportFailed`), the server answered with a non-success status
//! (`RemoteRequestFailed`), or the body could not be read as the expected
//! JSON shape (`MalformedResponse`). A 404 is not its own variant; callers
//! that care ask `is_not_found()`.

use std::fmt;

/// Errors returned by `PokeClient` operations and transports.
#[derive(Debug)]
pub enum ApiError {
    /// DNS, connect, TLS, timeout or body read failure.
    TransportFailed(String),

    /// The server returned a non-2xx status.
    RemoteRequestFailed { status: u16, url: String },

    /// The response body was not valid JSON or lacked an expected field.
    MalformedResponse(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::RemoteRequestFailed { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::TransportFailed(msg) => write!(f, "transport failed: {msg}"),
            ApiError::RemoteRequestFailed { status, url } => {
                write!(f, "HTTP {status} for {url}")
            }
            ApiError::MalformedResponse(msg) => {
                write!(f, "malformed response: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedResponse(e.to_string())
    }
}
