mod common;
use chrono::{Duration, Local};
use launchpad::Launchpad;
use common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pad = Launchpad::builder()
        .with_connector(get_connector())
        .request_timeout(std::time::Duration::from_secs(15))
        .build()?;

    // Ranges must straddle today: start not in the future, end not in the past.
    let today = Local::now().date_naive();
    let start = (today - Duration::days(365)).format("%Y-%m-%d").to_string();
    let end = (today + Duration::days(30)).format("%Y-%m-%d").to_string();

    println!("Fetching launches from {start} to {end}...");
    let launches = pad.launches_by_range(&start, &end).await;
    println!("{launches:#?}");

    // A range wholly in the past is rejected without a request.
    let rejected = pad.launches_by_range("2019-01-01", "2019-01-02").await;
    println!("{rejected:#?}");

    Ok(())
}
