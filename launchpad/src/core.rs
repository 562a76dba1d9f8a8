use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use launchpad_core::{ConnectorKey, LaunchConnector, LaunchError, LaunchpadConfig};
use launchpad_spacex::SpaceXConnector;

/// Query service that validates launch queries and projects upstream records.
///
/// Cheap to clone; every call is independent and holds no shared mutable state.
#[derive(Clone)]
pub struct Launchpad {
    pub(crate) connector: Arc<dyn LaunchConnector>,
    pub(crate) cfg: LaunchpadConfig,
}

/// Builder for constructing a `Launchpad` with custom configuration.
pub struct LaunchpadBuilder {
    connector: Option<Arc<dyn LaunchConnector>>,
    cfg: LaunchpadConfig,
}

impl Default for LaunchpadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchpadBuilder {
    /// Create a new builder with no connector and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: LaunchpadConfig::default(),
        }
    }

    /// Register the upstream connector, replacing any previously registered one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn LaunchConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Bound each upstream call; expiry reads as a retrieval failure.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Validate against a fixed date instead of the local calendar date.
    #[must_use]
    pub const fn pin_today(mut self, today: NaiveDate) -> Self {
        self.cfg.today = Some(today);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: LaunchpadConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Launchpad` service.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been registered via [`Self::with_connector`].
    pub fn build(self) -> Result<Launchpad, LaunchError> {
        let connector = self.connector.ok_or_else(|| {
            LaunchError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        Ok(Launchpad {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Launchpad {
    /// Service backed by the production SpaceX endpoint with default configuration.
    #[must_use]
    pub fn new_default() -> Self {
        Self {
            connector: Arc::new(SpaceXConnector::new_default()),
            cfg: LaunchpadConfig::default(),
        }
    }

    /// Start building a new `Launchpad` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use launchpad::{Launchpad, SpaceXConnector};
    ///
    /// let sx = SpaceXConnector::builder()
    ///     .http_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// let pad = Launchpad::builder().with_connector(Arc::new(sx)).build()?;
    /// let launches = pad.launches_by_year("2008").await;
    /// ```
    #[must_use]
    pub fn builder() -> LaunchpadBuilder {
        LaunchpadBuilder::new()
    }

    /// Key of the registered connector.
    #[must_use]
    pub fn connector_key(&self) -> ConnectorKey {
        self.connector.key()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &LaunchpadConfig {
        &self.cfg
    }

    /// The date queries are validated against.
    pub(crate) fn today(&self) -> NaiveDate {
        self.cfg
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Await an upstream future, applying the configured deadline if any.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "launchpad::core::upstream_call",
            skip(self, fut),
            fields(connector = self.connector.name()),
        )
    )]
    pub(crate) async fn upstream_call<T, Fut>(
        &self,
        capability: &'static str,
        fut: Fut,
    ) -> Result<T, LaunchError>
    where
        Fut: std::future::Future<Output = Result<T, LaunchError>>,
    {
        match self.cfg.request_timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .unwrap_or_else(|_| Err(LaunchError::request_timeout(capability))),
            None => fut.await,
        }
    }
}
