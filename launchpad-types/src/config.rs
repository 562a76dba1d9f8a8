//! Configuration for the launchpad query service.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Global configuration for the `Launchpad` service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchpadConfig {
    /// Optional deadline for a single upstream call.
    ///
    /// Expiry is reported like any other retrieval failure. `None` leaves the
    /// call unbounded apart from whatever the connector's HTTP client enforces.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
    /// Fixed "today" used for date validation; `None` means the local calendar date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}
