//! HTTP request/response types described as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` sits between the two and is
//! the only place I/O happens, so everything either side of it is
//! deterministic and easy to test.
//!
//! Every request is a GET; there is no method or body field.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL without the query string.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// The URL with its query string appended, for logs and error reports.
    ///
    /// Query values are not percent-encoded; every parameter this client
    /// sends is numeric.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{sep}{query}", self.url)
    }
}

/// An HTTP response described as plain data.
///
/// `url` is the final URL as reported by the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
