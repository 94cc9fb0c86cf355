//! Device config fallbacks, preferences and default locations.

use std::path::PathBuf;

use woot::config::{
    DeviceSource, SampleReason, default_device_config_path, default_preferences_path,
    load_devices, load_preferences,
};
use woot::error::WootError;

use crate::common::env::EnvGuard;
use crate::common::fixtures::Workspace;

#[test]
fn missing_config_is_tagged() {
    let ws = Workspace::new();
    let load = load_devices(&ws.config());
    assert!(matches!(
        load.source,
        DeviceSource::Sample(SampleReason::ConfigMissing { .. })
    ));
    assert_eq!(load.devices.len(), 2);
}

#[test]
fn malformed_config_is_tagged_invalid() {
    for body in ["{ not json", r#"{"devices": []}"#, r#"{"devices": {"X": {"profiles": "Gaming"}}}"#] {
        let ws = Workspace::with_config(body);
        let load = load_devices(&ws.config());
        assert!(
            matches!(
                load.source,
                DeviceSource::Sample(SampleReason::ConfigInvalid { .. })
            ),
            "{body} should be invalid, got {:?}",
            load.source
        );
        assert_eq!(load.devices[0].serial, "WK001");
    }
}

#[test]
fn empty_device_map_is_not_a_fallback() {
    let ws = Workspace::with_config(r#"{"devices": {}}"#);
    let load = load_devices(&ws.config());
    assert!(!load.source.is_sample());
    assert!(load.devices.is_empty());
}

#[test]
fn preferences_round_out_defaults() {
    let ws = Workspace::new();
    ws.write_preferences("enable_notifications = true\ndefault_profile = \"3\"\n");
    let prefs = load_preferences(&ws.preferences()).unwrap();
    assert!(prefs.enable_notifications);
    assert_eq!(prefs.default_profile.as_deref(), Some("3"));
    assert!(prefs.wootility_path.is_none());
}

#[test]
fn broken_preferences_are_reported() {
    let ws = Workspace::new();
    ws.write_preferences("enable_notifications = \"maybe\"");
    let err = load_preferences(&ws.preferences()).unwrap_err();
    assert!(matches!(err, WootError::ConfigParse(_)));
}

#[cfg(target_os = "linux")]
#[test]
fn default_paths_follow_config_dir() {
    let ws = Workspace::new();
    let root = ws.path().to_string_lossy().to_string();
    let _env = EnvGuard::apply([("XDG_CONFIG_HOME", Some(root.as_str())), ("APPDATA", None)]);

    assert_eq!(
        default_device_config_path().unwrap(),
        PathBuf::from(&root).join("WootingProfileSwitcher/config.json")
    );
    assert_eq!(
        default_preferences_path().unwrap(),
        PathBuf::from(&root).join("woot/preferences.toml")
    );
}

#[test]
fn appdata_wins_for_device_config() {
    let ws = Workspace::new();
    let root = ws.path().to_string_lossy().to_string();
    let _env = EnvGuard::set("APPDATA", &root);

    assert_eq!(
        default_device_config_path().unwrap(),
        PathBuf::from(&root)
            .join("WootingProfileSwitcher")
            .join("config.json")
    );
}
