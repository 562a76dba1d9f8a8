use async_trait::async_trait;

use crate::query::{DateRange, LaunchYear};
use crate::{ConnectorKey, LaunchError, LaunchRecord};

/// Capability label for year queries.
pub const CAP_BY_YEAR: &str = "launches/year";
/// Capability label for date-range queries.
pub const CAP_BY_RANGE: &str = "launches/range";

/// An upstream source of launch records.
///
/// Implementations issue exactly one outbound request per call and return the
/// records unprojected. Arguments arrive already validated.
#[async_trait]
pub trait LaunchConnector: Send + Sync {
    /// Stable connector name, used in error attribution and logs.
    fn name(&self) -> &'static str;

    /// Human-readable vendor of the upstream data.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Typed key for this connector.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Fetch all launch records for a calendar year.
    async fn launches_by_year(&self, year: LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError>;

    /// Fetch all launch records within a date range.
    async fn launches_by_range(&self, range: &DateRange) -> Result<Vec<LaunchRecord>, LaunchError>;
}
