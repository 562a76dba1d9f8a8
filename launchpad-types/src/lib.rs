//! Launchpad data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod record;
mod summary;

pub use config::LaunchpadConfig;
pub use connector::ConnectorKey;
pub use error::{LaunchError, RETRIEVAL_ERROR};
pub use record::{LaunchRecord, RocketRecord};
pub use summary::LaunchSummary;
