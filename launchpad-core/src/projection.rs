use crate::{LaunchRecord, LaunchSummary};

/// Project one upstream record down to its summary.
///
/// Scalar fields are copied as-is; `rocket_name`/`rocket_type` come from the
/// nested rocket object and stay absent when it is missing.
#[must_use]
pub fn summarize(record: LaunchRecord) -> LaunchSummary {
    let (rocket_name, rocket_type) = record
        .rocket
        .map_or((None, None), |r| (r.rocket_name, r.rocket_type));
    LaunchSummary {
        flight_number: record.flight_number,
        mission_name: record.mission_name,
        rocket_name,
        rocket_type,
        details: record.details,
        launch_success: record.launch_success,
        error: None,
    }
}

/// Project every record, preserving order and length.
#[must_use]
pub fn summarize_all(records: Vec<LaunchRecord>) -> Vec<LaunchSummary> {
    records.into_iter().map(summarize).collect()
}
