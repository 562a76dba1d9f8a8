use serde::{Deserialize, Serialize};

/// Caller-facing projection of a launch record.
///
/// A summary is either a projected record (any subset of the data fields, no
/// `error`) or a failure element (only `error`). Absent fields are omitted
/// when serialized rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSummary {
    /// Sequential flight number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<i64>,
    /// Mission name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_name: Option<String>,
    /// Rocket name from the nested rocket object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_name: Option<String>,
    /// Rocket type from the nested rocket object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_type: Option<String>,
    /// Free-form mission details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Whether the launch succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_success: Option<bool>,
    /// Failure message; set only on the single element of a failed query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LaunchSummary {
    /// Build a failure element carrying only `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// True if this element reports a failed query.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
