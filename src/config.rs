//! Client configuration.

use crate::{Error, Result};

/// Configuration for an Algolia [`Client`](crate::Client).
///
/// Holds the application credentials, the host lists used for read and
/// write operations, HTTP timeouts and any extra headers to send with every
/// request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application ID.
    pub app_id: String,
    /// Admin or search API key.
    pub api_key: String,
    /// Hosts tried in order for read operations.
    pub read_hosts: Vec<String>,
    /// Hosts tried in order for write operations.
    pub write_hosts: Vec<String>,
    /// Request timeout in milliseconds (0 to disable).
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds (0 to disable).
    pub connect_timeout_ms: u64,
    /// Extra headers sent with every request.
    pub extra_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Default request timeout in milliseconds.
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Default connect timeout in milliseconds.
    pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;

    /// Creates a configuration for the given application credentials.
    ///
    /// Read operations target the DSN host first, write operations the main
    /// host; both fall back to the three `algolianet.com` hosts.
    #[must_use]
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        let app_id = app_id.into();
        let fallbacks = (1..=3).map(|i| format!("{app_id}-{i}.algolianet.com"));

        let mut read_hosts = vec![format!("{app_id}-dsn.algolia.net")];
        read_hosts.extend(fallbacks.clone());

        let mut write_hosts = vec![format!("{app_id}.algolia.net")];
        write_hosts.extend(fallbacks);

        Self {
            app_id,
            api_key: api_key.into(),
            read_hosts,
            write_hosts,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: Self::DEFAULT_CONNECT_TIMEOUT_MS,
            extra_headers: Vec::new(),
        }
    }

    /// Creates a configuration from `ALGOLIA_APPLICATION_ID` and
    /// `ALGOLIA_API_KEY`, with timeout overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let app_id = std::env::var("ALGOLIA_APPLICATION_ID")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::InvalidInput("ALGOLIA_APPLICATION_ID not set".to_string()))?;
        let api_key = std::env::var("ALGOLIA_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::InvalidInput("ALGOLIA_API_KEY not set".to_string()))?;

        Ok(Self::new(app_id, api_key).with_env_overrides())
    }

    /// Applies environment variable overrides for timeouts.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = std::env::var("ALGOLIA_TIMEOUT_MS") {
            if let Ok(timeout_ms) = v.parse::<u64>() {
                self.timeout_ms = timeout_ms;
            }
        }
        if let Ok(v) = std::env::var("ALGOLIA_CONNECT_TIMEOUT_MS") {
            if let Ok(connect_timeout_ms) = v.parse::<u64>() {
                self.connect_timeout_ms = connect_timeout_ms;
            }
        }
        self
    }

    /// Replaces both host lists with a single explicit list.
    ///
    /// Useful for targeting a staging cluster or a local stub.
    #[must_use]
    pub fn with_hosts(mut self, hosts: Vec<String>) -> Self {
        self.read_hosts.clone_from(&hosts);
        self.write_hosts = hosts;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout_ms(mut self, connect_timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_timeout_ms;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_extra_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Validates that the credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the application ID or API key is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() {
            return Err(Error::InvalidInput("application ID is empty".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(Error::InvalidInput("API key is empty".to_string()));
        }
        Ok(())
    }
}
