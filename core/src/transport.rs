//! The I/O seam between the client and the network.
//!
//! # Design
//! `PokeClient` never performs I/O itself. It hands an `HttpRequest` to a
//! `Transport` and classifies the returned `HttpResponse`. Transports report
//! non-2xx statuses as data, not as errors; only failures that produce no
//! response at all become `ApiError::TransportFailed`.

use std::time::Duration;

use ureq::{Agent, ResponseExt};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes a GET request and returns whatever the server answered.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a single `ureq::Agent`.
///
/// The agent owns the connection pool, so one `UreqTransport` is the
/// "session": connections are reused across calls and released when the
/// transport is dropped.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(request.url.as_str());
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::TransportFailed(format!("{}: {e}", request.full_url())))?;

        let status = response.status().as_u16();
        let url = response.get_uri().to_string();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportFailed(format!("{url}: {e}")))?;

        Ok(HttpResponse { status, url, body })
    }
}
