//! Serde models for the files the CLI reads.
//!
//! - [`DeviceConfigFile`]: the Wooting Profile Switcher `config.json`,
//!   written by other tools and read best-effort.
//! - [`Preferences`]: the CLI's own optional `preferences.toml`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::device::{DEFAULT_PROFILE_NAMES, Device, UNKNOWN_MODEL};

/// Root of the device config document.
///
/// ```json
/// { "devices": { "A02B2104W031H00451": { "model_name": "Wooting 60HE", "profiles": ["Work", "Play"] } } }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeviceConfigFile {
    /// `null` is read the same as an absent key.
    #[serde(default)]
    pub devices: Option<BTreeMap<String, DeviceEntry>>,
}

/// One device in the config document. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeviceEntry {
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub profiles: Option<Vec<String>>,
}

impl DeviceEntry {
    /// Build a [`Device`], filling gaps with defaults.
    ///
    /// The file carries no liveness or active-slot signal, so devices are
    /// reported connected with the first profile active. An empty profile
    /// list is treated like a missing one.
    pub fn to_device(&self, serial: &str) -> Device {
        let model_name = self
            .model_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_MODEL.to_string());
        let profiles = self
            .profiles
            .clone()
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE_NAMES.iter().map(|s| (*s).to_string()).collect());

        Device {
            serial: serial.to_string(),
            model_name,
            connected: true,
            profiles,
            current_profile: 0,
            rgb_enabled: true,
        }
    }
}

impl DeviceConfigFile {
    /// Devices in serial order.
    pub fn to_devices(&self) -> Vec<Device> {
        self.devices
            .iter()
            .flatten()
            .map(|(serial, entry)| entry.to_device(serial))
            .collect()
    }
}

/// User preferences for the CLI.
///
/// # Example TOML
///
/// ```toml
/// wootility_path = "C:\\Tools\\Wootility\\Wootility.exe"
/// enable_notifications = true
/// default_profile = "2"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Preferences {
    /// Override for the Wootility executable location.
    pub wootility_path: Option<PathBuf>,
    /// Override for the device config location.
    pub config_path: Option<PathBuf>,
    /// Report no-op outcomes such as "already active".
    pub enable_notifications: bool,
    /// Profile number used by `quick-switch` when none is given.
    pub default_profile: Option<String>,
}
