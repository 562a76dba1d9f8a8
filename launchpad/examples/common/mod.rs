use launchpad::{LaunchConnector, SpaceXConnector};
use std::sync::Arc;

#[must_use]
pub fn get_connector() -> Arc<dyn LaunchConnector> {
    if std::env::var("LAUNCHPAD_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(launchpad_mock::MockConnector::new())
    } else {
        Arc::new(SpaceXConnector::new_default())
    }
}
