use launchpad_core::connector::CAP_BY_RANGE;
use launchpad_core::{DateRange, LaunchError, LaunchSummary, summarize_all};

use crate::Launchpad;
use crate::router::util::collapse_result;

impl Launchpad {
    /// Fetch all launches between two `YYYY-MM-DD` dates as summaries.
    ///
    /// The range must straddle today: `start` on or before it and `end` on or
    /// after it. A rejected start yields `[{ error: "invalid start year" }]`, a
    /// rejected end `[{ error: "invalid end year" }]`; the start is checked first.
    /// Any retrieval failure yields a single generic failure element.
    pub async fn launches_by_range(&self, start: &str, end: &str) -> Vec<LaunchSummary> {
        collapse_result(self.try_launches_by_range(start, end).await)
    }

    /// Typed variant of [`Self::launches_by_range`].
    ///
    /// # Errors
    /// Returns `InvalidRangeStart`/`InvalidRangeEnd` for rejected bounds, or the
    /// connector's error when retrieval fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "launchpad::launches_by_range",
            skip(self),
            fields(connector = self.connector.name()),
        )
    )]
    pub async fn try_launches_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<LaunchSummary>, LaunchError> {
        let range = DateRange::validate(start, end, self.today())?;
        let records = self
            .upstream_call(CAP_BY_RANGE, self.connector.launches_by_range(&range))
            .await?;
        Ok(summarize_all(records))
    }
}
