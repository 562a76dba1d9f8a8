use async_trait::async_trait;
use launchpad_core::query::parse_day;
use launchpad_core::{DateRange, LaunchConnector, LaunchError, LaunchRecord, LaunchYear};

mod fixtures;

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Year that always fails, to exercise the retrieval-error path.
    pub const FAIL_YEAR: i32 = 1900;

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Every fixture record, unfiltered.
    #[must_use]
    pub fn fixtures() -> Vec<LaunchRecord> {
        fixtures::all()
    }
}

#[async_trait]
impl LaunchConnector for MockConnector {
    fn name(&self) -> &'static str {
        "launchpad-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn launches_by_year(&self, year: LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError> {
        if year.get() == Self::FAIL_YEAR {
            return Err(LaunchError::connector(
                self.name(),
                format!("forced failure: launches for {year}"),
            ));
        }
        let wanted = year.to_string();
        Ok(fixtures::all()
            .into_iter()
            .filter(|r| r.launch_year.as_deref() == Some(wanted.as_str()))
            .collect())
    }

    async fn launches_by_range(
        &self,
        range: &DateRange,
    ) -> Result<Vec<LaunchRecord>, LaunchError> {
        Ok(fixtures::all()
            .into_iter()
            .filter(|r| {
                r.launch_date_utc
                    .as_deref()
                    .and_then(|ts| ts.get(..10))
                    .and_then(parse_day)
                    .is_some_and(|d| range.contains(d))
            })
            .collect())
    }
}
