use launchpad_core::{LaunchError, LaunchSummary};

/// Turn a typed query outcome into the list shape returned to callers.
///
/// Success passes through unchanged. Any error becomes a single failure
/// element carrying [`LaunchError::caller_message`]; transport and decode
/// failures are logged here before their cause is hidden.
pub fn collapse_result(res: Result<Vec<LaunchSummary>, LaunchError>) -> Vec<LaunchSummary> {
    match res {
        Ok(summaries) => summaries,
        Err(e) => {
            #[cfg(feature = "tracing")]
            if e.is_validation() {
                tracing::debug!(error = %e, "rejected launch query");
            } else {
                tracing::warn!(error = %e, "launch retrieval failed");
            }
            vec![LaunchSummary::failure(e.caller_message())]
        }
    }
}
