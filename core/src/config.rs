//! Client construction settings.

use std::time::Duration;

/// Root of the public PokeAPI.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Sent as `User-Agent` on every request. Not configurable.
pub const USER_AGENT: &str = "pokeapi-rs-sdk";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings fixed at construction time.
///
/// `base_url` only needs overriding for mirrors and tests; the remote API
/// contract is always the one rooted at [`BASE_URL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}
