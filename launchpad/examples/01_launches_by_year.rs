mod common;
use launchpad::Launchpad;
use common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector (mock in CI when LAUNCHPAD_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the service around it.
    let pad = Launchpad::builder().with_connector(connector).build()?;

    // 3. Query a year; the first argument overrides the default.
    let year = std::env::args().nth(1).unwrap_or_else(|| "2008".to_string());
    println!("Fetching launches for {year}...");
    let launches = pad.launches_by_year(&year).await;

    // 4. Print the result. Failures come back as a single element with `error`.
    for launch in &launches {
        if let Some(err) = &launch.error {
            println!("error: {err}");
            continue;
        }
        println!(
            "#{:<4} {:<30} {:<10} {:<8} success={:?}",
            launch.flight_number.map(|n| n.to_string()).unwrap_or_default(),
            launch.mission_name.as_deref().unwrap_or("-"),
            launch.rocket_name.as_deref().unwrap_or("-"),
            launch.rocket_type.as_deref().unwrap_or("-"),
            launch.launch_success,
        );
    }

    Ok(())
}
