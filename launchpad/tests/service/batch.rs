use launchpad::{LaunchError, LaunchSummary, RETRIEVAL_ERROR};

use crate::helpers::{ScriptedConnector, full_record, pad};

#[tokio::test]
async fn batch_keeps_input_order_and_isolates_failures() {
    let c = ScriptedConnector::with_fns(
        |year| match year.get() {
            2008 => Ok(vec![full_record(3, "Trailblazer"), full_record(4, "RatSat")]),
            2010 => Err(LaunchError::connector("scripted", "boom")),
            _ => Ok(vec![]),
        },
        |_| unreachable!("range not queried"),
    );
    let pad = pad(c.clone());

    let out = pad.launches_by_years(&["2008", "2010", "2099", "1999"]).await;
    let years: Vec<_> = out.iter().map(|(y, _)| y.as_str()).collect();
    assert_eq!(years, vec!["2008", "2010", "2099", "1999"]);

    assert_eq!(out[0].1.len(), 2);
    assert_eq!(out[1].1, vec![LaunchSummary::failure(RETRIEVAL_ERROR)]);
    assert_eq!(out[2].1, vec![LaunchSummary::failure("invalid year")]);
    assert!(out[3].1.is_empty());

    // 2099 is rejected before reaching the connector.
    assert_eq!(c.call_count(), 3);
}

#[tokio::test]
async fn empty_batch_makes_no_calls() {
    let c = ScriptedConnector::returning(vec![full_record(1, "X")]);
    let out = pad(c.clone()).launches_by_years(&[]).await;
    assert!(out.is_empty());
    assert_eq!(c.call_count(), 0);
}
