//! Re-export of foundational types from `launchpad-types`.

pub use launchpad_types::{
    ConnectorKey, LaunchError, LaunchRecord, LaunchSummary, LaunchpadConfig, RETRIEVAL_ERROR,
    RocketRecord,
};
