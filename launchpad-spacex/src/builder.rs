use std::time::Duration;

use launchpad_core::LaunchError;

use crate::SpaceXConnector;
use crate::adapter::{DEFAULT_BASE_URL, RealAdapter};

const DEFAULT_USER_AGENT: &str = concat!("launchpad/", env!("CARGO_PKG_VERSION"));

/// Builder for a [`SpaceXConnector`] with a custom endpoint or HTTP client.
#[derive(Debug, Clone)]
pub struct SpaceXConnectorBuilder {
    base_url: String,
    client: Option<reqwest::Client>,
    user_agent: String,
    http_timeout: Option<Duration>,
}

impl Default for SpaceXConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceXConnectorBuilder {
    /// Start from the production endpoint and a client built at `build()` time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: None,
        }
    }

    /// Point the connector at a different launches endpoint (mirrors, test servers).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a caller-provided HTTP client.
    ///
    /// The user agent and HTTP timeout set on this builder are ignored when a
    /// client is supplied; configure them on the client instead.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Override the `User-Agent` header sent upstream.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Bound every HTTP request made by the internally built client.
    #[must_use]
    pub const fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL is not an absolute `http(s)` URL or
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<SpaceXConnector, LaunchError> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| LaunchError::InvalidArg(format!("base url {}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LaunchError::InvalidArg(format!(
                "base url {} must use http or https",
                self.base_url
            )));
        }

        let client = match self.client {
            Some(c) => c,
            None => {
                let mut b = reqwest::Client::builder().user_agent(self.user_agent);
                if let Some(t) = self.http_timeout {
                    b = b.timeout(t);
                }
                b.build()
                    .map_err(|e| LaunchError::InvalidArg(format!("http client: {e}")))?
            }
        };

        Ok(SpaceXConnector::from_real(RealAdapter::new(
            client,
            url.to_string(),
        )))
    }
}

impl SpaceXConnector {
    /// Returns an unconfigured builder targeting the production endpoint.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn builder() -> SpaceXConnectorBuilder {
        SpaceXConnectorBuilder::new()
    }
}
