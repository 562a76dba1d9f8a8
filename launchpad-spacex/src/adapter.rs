#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use launchpad_core::{DateRange, LaunchError, LaunchRecord, LaunchYear};

/// Production endpoint of the SpaceX v3 launches API.
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v3/launches";

const CONNECTOR: &str = "launchpad-spacex";

/// Launch-record fetching abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait SxLaunches: Send + Sync {
    /// `GET {base}?launch_year={year}`.
    async fn by_year(&self, year: LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError>;

    /// `GET {base}?start={start}&end={end}`.
    async fn by_range(&self, range: DateRange) -> Result<Vec<LaunchRecord>, LaunchError>;
}

/// Production adapter backed by a `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct RealAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl RealAdapter {
    /// Construct from an HTTP client and an already validated base URL.
    #[must_use]
    pub const fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Construct with a fresh client pointed at [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(reqwest::Client::new(), DEFAULT_BASE_URL.to_string())
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_records(
        &self,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<Vec<LaunchRecord>, LaunchError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| map_http_err(&e, context))?
            .error_for_status()
            .map_err(|e| map_http_err(&e, context))?;

        let records = resp
            .json::<Vec<LaunchRecord>>()
            .await
            .map_err(|e| map_http_err(&e, context))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(context, count = records.len(), "upstream returned launch records");

        Ok(records)
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> LaunchError {
    if e.is_timeout() {
        LaunchError::request_timeout(context.to_string())
    } else if let Some(status) = e.status() {
        LaunchError::connector(CONNECTOR, format!("status {status}: {context}"))
    } else if e.is_decode() {
        LaunchError::Data(format!("{context}: {e}"))
    } else {
        LaunchError::connector(CONNECTOR, format!("{context}: {e}"))
    }
}

#[async_trait]
impl SxLaunches for RealAdapter {
    async fn by_year(&self, year: LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError> {
        self.get_records(
            &[("launch_year", year.to_string())],
            &format!("launches for {year}"),
        )
        .await
    }

    async fn by_range(&self, range: DateRange) -> Result<Vec<LaunchRecord>, LaunchError> {
        let (start, end) = (range.start_param(), range.end_param());
        let context = format!("launches from {start} to {end}");
        self.get_records(&[("start", start), ("end", end)], &context)
            .await
    }
}

#[cfg(feature = "test-adapters")]
impl dyn SxLaunches {
    /// Build a `SxLaunches` from closures (tests only).
    pub fn from_fns<FY, FR>(fy: FY, fr: FR) -> Arc<dyn SxLaunches>
    where
        FY: Send + Sync + 'static + Fn(LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError>,
        FR: Send + Sync + 'static + Fn(DateRange) -> Result<Vec<LaunchRecord>, LaunchError>,
    {
        struct FnLaunches<FY, FR> {
            fy: FY,
            fr: FR,
        }
        #[async_trait]
        impl<FY, FR> SxLaunches for FnLaunches<FY, FR>
        where
            FY: Send + Sync + 'static + Fn(LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError>,
            FR: Send + Sync + 'static + Fn(DateRange) -> Result<Vec<LaunchRecord>, LaunchError>,
        {
            async fn by_year(&self, year: LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError> {
                (self.fy)(year)
            }
            async fn by_range(&self, range: DateRange) -> Result<Vec<LaunchRecord>, LaunchError> {
                (self.fr)(range)
            }
        }
        Arc::new(FnLaunches { fy, fr })
    }

    /// Build a `SxLaunches` serving only year queries; range queries fail.
    pub fn from_year_fn<FY>(fy: FY) -> Arc<dyn SxLaunches>
    where
        FY: Send + Sync + 'static + Fn(LaunchYear) -> Result<Vec<LaunchRecord>, LaunchError>,
    {
        Self::from_fns(fy, |_| {
            Err(LaunchError::connector(CONNECTOR, "range stub not configured"))
        })
    }
}
