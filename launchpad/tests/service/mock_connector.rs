use std::sync::Arc;

use launchpad::{LaunchSummary, Launchpad, RETRIEVAL_ERROR};
use launchpad_mock::MockConnector;

fn mock_pad() -> Launchpad {
    Launchpad::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .pin_today(chrono::NaiveDate::from_ymd_opt(2020, 6, 15).expect("valid date"))
        .build()
        .expect("connector registered")
}

#[tokio::test]
async fn falcon_one_year_projects_fixture_records() {
    let out = mock_pad().launches_by_year("2006").await;
    assert_eq!(
        out,
        vec![LaunchSummary {
            flight_number: Some(1),
            mission_name: Some("FalconSat".into()),
            rocket_name: Some("Falcon 1".into()),
            rocket_type: Some("Merlin A".into()),
            details: Some("Engine failure at 33 seconds and loss of vehicle".into()),
            launch_success: Some(false),
            error: None,
        }]
    );
}

#[tokio::test]
async fn fixture_without_rocket_stays_sparse() {
    let out = mock_pad().launches_by_year("2020").await;
    let sparse = out
        .iter()
        .find(|s| s.flight_number == Some(97))
        .expect("fixture 97 present");
    assert_eq!(sparse.rocket_name, None);
    assert_eq!(sparse.launch_success, None);
}

#[tokio::test]
async fn forced_failure_year_reads_as_generic_failure() {
    let out = mock_pad().launches_by_year("1900").await;
    assert_eq!(out, vec![LaunchSummary::failure(RETRIEVAL_ERROR)]);
}

#[tokio::test]
async fn range_straddling_today_filters_fixtures() {
    let out = mock_pad()
        .launches_by_range("2020-05-01", "2020-12-31")
        .await;
    let flights: Vec<_> = out.iter().filter_map(|s| s.flight_number).collect();
    assert_eq!(flights, vec![94, 97]);
}
