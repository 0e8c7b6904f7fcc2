//! TinyToken client configuration.

use std::time::Duration;

/// Production compression endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.tinytoken.org/compress";

/// Timeout applied to every compression request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// TinyToken client configuration.
#[derive(Debug, Clone)]
pub struct TinyTokenConfig {
    /// URL the compression request is POSTed to.
    pub endpoint: String,
    /// Request timeout, covering connect through reading the body.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// API key bound to the client, used when a call supplies none.
    pub api_key: Option<String>,
}

impl Default for TinyTokenConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("tinytoken-client/{}", env!("CARGO_PKG_VERSION")),
            api_key: None,
        }
    }
}

impl TinyTokenConfig {
    /// Create a new configuration builder.
    pub fn builder() -> TinyTokenConfigBuilder {
        TinyTokenConfigBuilder::default()
    }
}

/// Builder for TinyToken client configuration.
#[derive(Debug, Default)]
pub struct TinyTokenConfigBuilder {
    config: TinyTokenConfig,
}

impl TinyTokenConfigBuilder {
    /// Set the compression endpoint URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Bind an API key to the client.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TinyTokenConfig {
        self.config
    }
}
