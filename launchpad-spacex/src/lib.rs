//! launchpad-spacex
//!
//! Public connector that implements `LaunchConnector` on top of the SpaceX v3
//! launches endpoint, using `reqwest` for transport.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;

use std::sync::Arc;

use adapter::{RealAdapter, SxLaunches};
use async_trait::async_trait;
use launchpad_core::{
    ConnectorKey, DateRange, LaunchConnector, LaunchError, LaunchRecord, LaunchYear,
};

pub use adapter::DEFAULT_BASE_URL;
pub use builder::SpaceXConnectorBuilder;

#[cfg(feature = "test-adapters")]
type LaunchesAdapter = Arc<dyn SxLaunches>;
#[cfg(not(feature = "test-adapters"))]
type LaunchesAdapter = Arc<RealAdapter>;

/// Public connector type. Production users will construct with `SpaceXConnector::new_default()`.
pub struct SpaceXConnector {
    launches: LaunchesAdapter,
}

impl SpaceXConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("launchpad-spacex");

    fn normalize_error(e: LaunchError) -> LaunchError {
        match e {
            LaunchError::Connector { connector: _, msg } => {
                LaunchError::connector(Self::KEY.as_str(), msg)
            }
            other => other,
        }
    }

    /// Build against the production endpoint with a fresh HTTP client.
    #[must_use]
    pub fn new_default() -> Self {
        Self::from_real(RealAdapter::new_default())
    }

    pub(crate) fn from_real(a: RealAdapter) -> Self {
        Self {
            launches: Arc::new(a),
        }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_adapter(adapter: Arc<dyn SxLaunches>) -> Self {
        Self { launches: adapter }
    }
}

#[async_trait]
impl LaunchConnector for SpaceXConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "SpaceX"
    }

    async fn launches_by_year(&self, year: LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError> {
        self.launches
            .by_year(year)
            .await
            .map_err(Self::normalize_error)
    }

    async fn launches_by_range(
        &self,
        range: &DateRange,
    ) -> Result<Vec<LaunchRecord>, LaunchError> {
        self.launches
            .by_range(*range)
            .await
            .map_err(Self::normalize_error)
    }
}
