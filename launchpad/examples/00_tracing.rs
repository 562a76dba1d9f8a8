mod common;
use launchpad::Launchpad;
use common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,launchpad=trace,launchpad_spacex=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let pad = Launchpad::builder().with_connector(get_connector()).build()?;

    // Accepted query
    let _ = pad.launches_by_year("2008").await;

    // Rejected before any request (debug-level log)
    let _ = pad.launches_by_year("3000").await;

    // Upstream failure with the mock connector (warn-level log)
    let _ = pad.launches_by_year("1900").await;

    Ok(())
}
