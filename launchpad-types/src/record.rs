//! Upstream launch records as returned by the launch-data API.

use serde::{Deserialize, Serialize};

/// Nested rocket object of an upstream launch record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketRecord {
    /// Vehicle name, e.g. "Falcon 9".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_name: Option<String>,
    /// Vehicle type, e.g. "FT".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_type: Option<String>,
}

/// One upstream launch record.
///
/// Every field is optional: missing keys and JSON `null` both decode to `None`,
/// and keys not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<i64>,
    /// Mission name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_name: Option<String>,
    /// Free-form mission details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Whether the launch succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_success: Option<bool>,
    /// Launch year as a four-digit string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<String>,
    /// Launch instant in RFC 3339 form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_date_utc: Option<String>,
    /// Nested rocket object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket: Option<RocketRecord>,
}
