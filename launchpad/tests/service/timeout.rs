use std::time::Duration;

use launchpad::{LaunchError, LaunchSummary, Launchpad, RETRIEVAL_ERROR};

use crate::helpers::{ScriptedConnector, full_record, today};

#[tokio::test(start_paused = true)]
async fn slow_upstream_past_deadline_is_generic_failure() {
    let c = ScriptedConnector::slow(vec![full_record(1, "X")], Duration::from_secs(30));
    let pad = Launchpad::builder()
        .with_connector(c.clone())
        .pin_today(today())
        .request_timeout(Duration::from_millis(100))
        .build()
        .expect("connector registered");

    let out = pad.launches_by_year("2019").await;
    assert_eq!(out, vec![LaunchSummary::failure(RETRIEVAL_ERROR)]);

    let err = pad.try_launches_by_range("2019-01-01", "2030-01-01").await.unwrap_err();
    assert_eq!(err, LaunchError::request_timeout("launches/range"));
}

#[tokio::test(start_paused = true)]
async fn upstream_within_deadline_succeeds() {
    let c = ScriptedConnector::slow(vec![full_record(1, "X")], Duration::from_millis(10));
    let pad = Launchpad::builder()
        .with_connector(c)
        .pin_today(today())
        .request_timeout(Duration::from_secs(5))
        .build()
        .expect("connector registered");

    let out = pad.launches_by_year("2019").await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].error, None);
}

#[tokio::test(start_paused = true)]
async fn no_deadline_waits_for_slow_upstream() {
    let c = ScriptedConnector::slow(vec![full_record(1, "X")], Duration::from_secs(600));
    let pad = crate::helpers::pad(c);
    let out = pad.launches_by_year("2019").await;
    assert_eq!(out.len(), 1);
}
