use launchpad::{LaunchError, LaunchSummary, RETRIEVAL_ERROR};

use crate::helpers::{ScriptedConnector, full_record, pad};

#[tokio::test]
async fn range_wholly_in_past_is_invalid_end() {
    let c = ScriptedConnector::returning(vec![full_record(1, "X")]);
    let out = pad(c.clone())
        .launches_by_range("2019-01-01", "2019-01-02")
        .await;
    assert_eq!(out, vec![LaunchSummary::failure("invalid end year")]);
    assert_eq!(c.call_count(), 0);
}

#[tokio::test]
async fn range_wholly_in_future_is_invalid_start() {
    let c = ScriptedConnector::returning(vec![full_record(1, "X")]);
    let out = pad(c.clone())
        .launches_by_range("2021-01-01", "2021-06-30")
        .await;
    assert_eq!(out, vec![LaunchSummary::failure("invalid start year")]);
    assert_eq!(c.call_count(), 0);
}

#[tokio::test]
async fn malformed_bounds_are_rejected_start_first() {
    let c = ScriptedConnector::returning(vec![]);
    let pad = pad(c.clone());
    assert_eq!(
        pad.launches_by_range("2019-1-1", "2030-01-01").await,
        vec![LaunchSummary::failure("invalid start year")]
    );
    assert_eq!(
        pad.launches_by_range("2019-01-01", "2030-02-30").await,
        vec![LaunchSummary::failure("invalid end year")]
    );
    assert_eq!(
        pad.launches_by_range("nope", "nope").await,
        vec![LaunchSummary::failure("invalid start year")]
    );
    assert_eq!(c.call_count(), 0);
}

#[tokio::test]
async fn straddling_range_is_fetched_and_projected() {
    let c = ScriptedConnector::with_fns(
        |_| unreachable!("year not queried"),
        |range| {
            assert_eq!(range.start_param(), "2019-01-01");
            assert_eq!(range.end_param(), "2030-12-31");
            Ok(vec![full_record(80, "Crew-1"), full_record(81, "Crew-2")])
        },
    );
    let out = pad(c.clone())
        .launches_by_range("2019-01-01", "2030-12-31")
        .await;
    assert_eq!(c.call_count(), 1);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].mission_name.as_deref(), Some("Crew-2"));
    assert_eq!(out[1].rocket_name.as_deref(), Some("Falcon 9"));
    assert!(out.iter().all(|s| s.error.is_none()));
}

#[tokio::test]
async fn range_bounds_on_today_are_accepted() {
    let c = ScriptedConnector::returning(vec![]);
    let out = pad(c.clone())
        .launches_by_range("2020-06-15", "2020-06-15")
        .await;
    assert!(out.is_empty());
    assert_eq!(c.call_count(), 1);
}

#[tokio::test]
async fn range_upstream_failure_is_single_generic_element() {
    let c = ScriptedConnector::failing(LaunchError::connector("scripted", "reset by peer"));
    let out = pad(c)
        .launches_by_range("2019-01-01", "2030-12-31")
        .await;
    assert_eq!(out, vec![LaunchSummary::failure(RETRIEVAL_ERROR)]);
}

#[tokio::test]
async fn typed_range_variant_reports_which_bound() {
    let c = ScriptedConnector::returning(vec![]);
    let pad = pad(c);
    assert_eq!(
        pad.try_launches_by_range("2019-01-01", "2019-01-02")
            .await
            .unwrap_err(),
        LaunchError::InvalidRangeEnd
    );
    assert_eq!(
        pad.try_launches_by_range("2030-01-01", "2030-01-02")
            .await
            .unwrap_err(),
        LaunchError::InvalidRangeStart
    );
}
