use launchpad_core::connector::CAP_BY_YEAR;
use launchpad_core::{LaunchError, LaunchSummary, LaunchYear, summarize_all};

use crate::Launchpad;
use crate::router::util::collapse_result;

impl Launchpad {
    /// Fetch all launches of a calendar year as summaries.
    ///
    /// `year` must be four digits and not later than the current year; otherwise
    /// the result is `[{ error: "invalid year" }]` and nothing is sent upstream.
    /// Any retrieval failure yields a single generic failure element.
    pub async fn launches_by_year(&self, year: &str) -> Vec<LaunchSummary> {
        collapse_result(self.try_launches_by_year(year).await)
    }

    /// Typed variant of [`Self::launches_by_year`].
    ///
    /// # Errors
    /// Returns `InvalidYear` for a rejected token, or the connector's error
    /// (connector, data, or timeout) when retrieval fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "launchpad::launches_by_year",
            skip(self),
            fields(connector = self.connector.name()),
        )
    )]
    pub async fn try_launches_by_year(
        &self,
        year: &str,
    ) -> Result<Vec<LaunchSummary>, LaunchError> {
        let year = LaunchYear::validate(year, self.today())?;
        let records = self
            .upstream_call(CAP_BY_YEAR, self.connector.launches_by_year(year))
            .await?;
        Ok(summarize_all(records))
    }
}
