//! Multi-device quick switch and RGB batches with their reported tiers.

use std::sync::Arc;

use woot::batch::{BatchOutcome, DeviceStatus, apply_effect_all, switch_all};
use woot::client::{ClientConfig, WootilityClient};
use woot::device::mock::{MockBackend, MockConfig, Operation};
use woot::output::batch_headline;

use crate::common::fixtures::{THREE_DEVICES, Workspace};
use crate::common::init_test_logging;

fn client_with(ws: &Workspace, backend: &Arc<MockBackend>) -> WootilityClient {
    let config = ClientConfig::new()
        .with_wootility_path(ws.wootility())
        .with_config_path(ws.config());
    WootilityClient::with_backend(config, Box::new(Arc::clone(backend))).unwrap()
}

#[test]
fn skipped_device_is_outside_the_denominator() {
    init_test_logging();
    let ws = Workspace::with_config(THREE_DEVICES);
    let backend = Arc::new(MockBackend::new());
    let client = client_with(&ws, &backend);

    let report = switch_all(&client, &client.devices(), 1);

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.attempted, 2);
    assert_eq!(report.summary.succeeded, 2);
    assert_eq!(report.outcome, BatchOutcome::Complete);
    assert_eq!(report.results[1].serial, "WK200");
    assert_eq!(report.results[1].status, DeviceStatus::Skipped);
    assert_eq!(batch_headline(&report, None), "Switched 2 devices to Gaming");
    assert_eq!(backend.touched_serials(), ["WK100", "WK300"]);
}

#[test]
fn one_failure_makes_a_partial_switch() {
    init_test_logging();
    let ws = Workspace::with_config(THREE_DEVICES);
    let backend = Arc::new(MockBackend::new().failing_serial("WK300"));
    let client = client_with(&ws, &backend);

    let report = switch_all(&client, &client.devices(), 0);

    assert_eq!(report.summary.attempted, 3);
    assert_eq!(report.summary.succeeded, 2);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.outcome, BatchOutcome::Partial);
    assert_eq!(
        batch_headline(&report, None),
        "Switched 2/3 devices to Profile 1"
    );
}

#[test]
fn every_device_failing_is_a_failure() {
    let ws = Workspace::with_config(THREE_DEVICES);
    let backend = Arc::new(MockBackend::new().with_config(MockConfig {
        fail_after_ops: Some(0),
        failing_serials: Vec::new(),
    }));
    let client = client_with(&ws, &backend);

    let report = switch_all(&client, &client.devices(), 1);
    assert_eq!(report.outcome, BatchOutcome::Failed);
    assert_eq!(batch_headline(&report, None), "Failed to switch to Profile 2");
    assert_eq!(backend.operation_count(), 2);
}

#[test]
fn nothing_attempted_reports_failure() {
    let ws = Workspace::with_config(r#"{"devices": {"ONE": {"profiles": ["Solo"]}}}"#);
    let backend = Arc::new(MockBackend::new());
    let client = client_with(&ws, &backend);

    let report = switch_all(&client, &client.devices(), 3);
    assert_eq!(report.outcome, BatchOutcome::NothingAttempted);
    assert_eq!(batch_headline(&report, None), "Failed to switch to Profile 4");
    backend.assert_no_operations();
}

#[test]
fn effect_reaches_every_rgb_device_in_order() {
    let ws = Workspace::with_config(THREE_DEVICES);
    let backend = Arc::new(MockBackend::new());
    let client = client_with(&ws, &backend);

    let report = apply_effect_all(&client, &client.devices(), "rainbow-wave");
    assert_eq!(report.outcome, BatchOutcome::Complete);
    assert_eq!(
        batch_headline(&report, Some("Rainbow Wave")),
        "Rainbow Wave applied to 3 device(s)"
    );
    backend.assert_operations(
        &["WK100", "WK200", "WK300"].map(|serial| Operation::ApplyRgbEffect {
            serial: serial.to_string(),
            effect_id: "rainbow-wave".to_string(),
        }),
    );
}
