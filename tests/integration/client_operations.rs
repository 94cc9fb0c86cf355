//! Client operations against sample and config-file devices.

use std::collections::BTreeSet;

use woot::client::{ClientConfig, WootilityClient, validate_profile_number};
use woot::device::profile_description;

use crate::common::assertions::assert_profile_id;
use crate::common::fixtures::{THREE_DEVICES, Workspace};

fn sample_client(ws: &Workspace) -> WootilityClient {
    // No install candidates and no config file: mock mode with sample data.
    let config = ClientConfig::new()
        .with_install_candidates(Vec::new())
        .with_config_path(ws.config());
    WootilityClient::new(config).unwrap()
}

fn installed_client(ws: &Workspace) -> WootilityClient {
    let config = ClientConfig::new()
        .with_wootility_path(ws.wootility())
        .with_config_path(ws.config());
    WootilityClient::new(config).unwrap()
}

#[test]
fn absent_config_yields_the_two_sample_devices() {
    let ws = Workspace::new();
    let client = sample_client(&ws);
    let devices = client.devices();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].serial, "WK001");
    assert_eq!(devices[0].model_name, "Wooting One");
    assert_eq!(devices[0].profiles, ["Default", "Gaming", "Typing", "Custom"]);
    assert_eq!(devices[0].current_profile, 0);
    assert_eq!(devices[1].serial, "WK002");
    assert_eq!(devices[1].model_name, "Wooting Two HE");
    assert_eq!(devices[1].profiles, ["Work", "Gaming", "Streaming", "RGB Show"]);
    assert_eq!(devices[1].current_profile, 1);
    assert!(devices.iter().all(|d| d.connected && d.rgb_enabled));
}

#[test]
fn exactly_one_active_profile_per_device() {
    for ws in [Workspace::new(), Workspace::with_config(THREE_DEVICES)] {
        let client = installed_client(&ws);
        for device in client.devices() {
            let profiles = client.profiles(&device.serial);
            let active: Vec<_> = profiles.iter().filter(|p| p.active).collect();
            assert_eq!(active.len(), 1, "device {}", device.serial);
            assert_eq!(active[0].profile_index, device.current_profile);
            for profile in &profiles {
                assert_profile_id(&profile.id, &device.serial);
                assert_eq!(profile.device_serial, device.serial);
            }
        }
    }
}

#[test]
fn config_devices_start_on_first_profile() {
    let ws = Workspace::with_config(THREE_DEVICES);
    let client = installed_client(&ws);

    let serials: Vec<_> = client.devices().into_iter().map(|d| d.serial).collect();
    assert_eq!(serials, ["WK100", "WK200", "WK300"]);
    assert_eq!(client.current_profile("WK100"), 0);

    let fallback = client.device("WK300").unwrap();
    assert_eq!(fallback.model_name, "Unknown Wooting Device");
    assert_eq!(fallback.profiles, ["Default", "Gaming", "Typing", "Custom"]);
}

#[test]
fn unknown_serial_has_no_profiles() {
    let ws = Workspace::new();
    let client = sample_client(&ws);
    assert!(client.profiles("UNKNOWN").is_empty());
    assert!(client.device("UNKNOWN").is_none());
}

#[test]
fn profile_numbers_one_to_four() {
    for (input, index) in [("1", 0), ("2", 1), ("3", 2), ("4", 3)] {
        assert_eq!(validate_profile_number(input).unwrap(), index);
    }
    for (input, index) in [("2.0", 1), ("3abc", 2), ("+4", 3)] {
        assert_eq!(validate_profile_number(input).unwrap(), index);
    }
    for input in ["0", "5", "abc", "-1", ".5"] {
        assert!(validate_profile_number(input).is_err(), "{input} should fail");
    }
    assert_eq!(
        validate_profile_number("abc").unwrap_err().to_string(),
        "Profile number must be a number"
    );
    assert_eq!(
        validate_profile_number("5").unwrap_err().to_string(),
        "Profile number must be between 1 and 4"
    );
}

#[test]
fn descriptions_ignore_case() {
    let expected = profile_description("Gaming", 1);
    assert_eq!(profile_description("gaming", 0), expected);
    assert_eq!(profile_description("GAMING", 3), expected);
    assert_eq!(profile_description("Foo", 2), "Profile 3 configuration");
}

#[test]
fn rgb_catalog_is_fixed() {
    let ws = Workspace::new();
    let client = sample_client(&ws);
    let ids: BTreeSet<_> = client.rgb_effects().iter().map(|e| e.id).collect();
    let expected: BTreeSet<_> = [
        "rainbow-wave",
        "breathing",
        "reactive",
        "static-red",
        "static-blue",
        "static-white",
        "off",
    ]
    .into_iter()
    .collect();
    assert_eq!(client.rgb_effects().len(), 7);
    assert_eq!(ids, expected);
}

#[test]
fn installed_client_accepts_actions() {
    let ws = Workspace::new();
    let client = installed_client(&ws);
    assert!(!client.is_mock());
    assert!(client.is_available());
    assert!(client.switch_profile("WK001", 3));
    assert!(client.apply_rgb_effect("WK001", "anything-goes"));
}
