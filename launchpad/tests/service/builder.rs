use std::time::Duration;

use launchpad::{LaunchError, Launchpad, LaunchpadConfig, SpaceXConnector};

use crate::helpers::{ScriptedConnector, today};

#[test]
fn build_without_connector_fails() {
    let err = Launchpad::builder().build().err().expect("no connector");
    assert!(matches!(err, LaunchError::InvalidArg(_)));
}

#[test]
fn builder_records_configuration() {
    let pad = Launchpad::builder()
        .with_connector(ScriptedConnector::returning(vec![]))
        .request_timeout(Duration::from_secs(3))
        .pin_today(today())
        .build()
        .expect("connector registered");
    assert_eq!(pad.connector_key().as_str(), "scripted");
    assert_eq!(
        pad.config(),
        &LaunchpadConfig {
            request_timeout: Some(Duration::from_secs(3)),
            today: Some(today()),
        }
    );
}

#[test]
fn config_replaces_earlier_settings() {
    let pad = Launchpad::builder()
        .with_connector(ScriptedConnector::returning(vec![]))
        .request_timeout(Duration::from_secs(3))
        .config(LaunchpadConfig::default())
        .build()
        .expect("connector registered");
    assert_eq!(pad.config(), &LaunchpadConfig::default());
}

#[test]
fn later_connector_replaces_earlier() {
    let pad = Launchpad::builder()
        .with_connector(ScriptedConnector::returning(vec![]))
        .with_connector(std::sync::Arc::new(launchpad_mock::MockConnector::new()))
        .build()
        .expect("connector registered");
    assert_eq!(pad.connector_key().as_str(), "launchpad-mock");
}

#[test]
fn default_service_targets_spacex() {
    let pad = Launchpad::new_default();
    assert_eq!(pad.connector_key(), SpaceXConnector::KEY);
    assert!(pad.config().today.is_none());
}
