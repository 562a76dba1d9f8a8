//! Launchpad answers launch queries against the SpaceX launch-data API.
//!
//! Overview
//! - Validates the query (a year, or a date range) before anything leaves the process.
//! - Issues exactly one upstream request per query through a `LaunchConnector`.
//! - Projects each upstream record to a compact `LaunchSummary`.
//! - Never raises at the list-returning boundary: failures come back as a
//!   single element carrying only `error`.
//!
//! Validation rules
//! - Year queries accept four digits no later than the current year.
//! - Range queries accept strict `YYYY-MM-DD` bounds whose range straddles today:
//!   the start must not be in the future and the end must not be in the past.
//!   A range wholly in the past or wholly in the future is rejected.
//!
//! Error messages
//! - `"invalid year"`, `"invalid start year"`, `"invalid end year"` for rejected input.
//! - `"There was an error retrieving this launch"` for any transport, decode, or
//!   timeout failure; the cause is logged (feature `tracing`) but not returned.
//!
//! Examples
//! ```rust,ignore
//! use launchpad::Launchpad;
//!
//! let pad = Launchpad::new_default();
//! for launch in pad.launches_by_year("2008").await {
//!     println!("{:?} {:?}", launch.flight_number, launch.mission_name);
//! }
//! let current = pad.launches_by_range("2020-01-01", "2099-12-31").await;
//! ```
//!
//! The `try_*` variants return `Result<Vec<LaunchSummary>, LaunchError>` for
//! callers that prefer typed errors.
//!
//! See `launchpad/examples/` for runnable demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Launchpad, LaunchpadBuilder};
pub use router::util::collapse_result;

pub use launchpad_spacex::{DEFAULT_BASE_URL, SpaceXConnector, SpaceXConnectorBuilder};

// Re-export core types for convenience
pub use launchpad_core::{
    ConnectorKey, DateRange, LaunchConnector, LaunchError, LaunchRecord, LaunchSummary,
    LaunchYear, LaunchpadConfig, RETRIEVAL_ERROR, RocketRecord,
};
