//! Loaders for the device config and the CLI preferences.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::schema::{DeviceConfigFile, Preferences};
use crate::device::{Device, sample_devices};
use crate::error::{Result, WootError};

/// Why sample devices were served instead of config data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SampleReason {
    /// No config file at the expected location.
    ConfigMissing { path: PathBuf },
    /// The file exists but could not be read.
    ConfigUnreadable { path: PathBuf, error: String },
    /// The file was read but is not a valid device config.
    ConfigInvalid { path: PathBuf, error: String },
}

impl SampleReason {
    pub fn describe(&self) -> String {
        match self {
            Self::ConfigMissing { path } => format!("no device config at {}", path.display()),
            Self::ConfigUnreadable { path, error } => {
                format!("could not read {}: {error}", path.display())
            }
            Self::ConfigInvalid { path, error } => {
                format!("invalid device config {}: {error}", path.display())
            }
        }
    }
}

/// Where a device list came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceSource {
    /// Parsed from the device config file.
    ConfigFile { path: PathBuf },
    /// The built-in sample set.
    Sample(SampleReason),
}

impl DeviceSource {
    pub const fn is_sample(&self) -> bool {
        matches!(self, Self::Sample(_))
    }
}

/// Result of a device load: never an error, always tagged with its source.
#[derive(Debug, Clone)]
pub struct DeviceLoad {
    pub devices: Vec<Device>,
    pub source: DeviceSource,
}

impl DeviceLoad {
    fn sample(reason: SampleReason) -> Self {
        Self {
            devices: sample_devices(),
            source: DeviceSource::Sample(reason),
        }
    }
}

/// Read the device config at `path`, falling back to the sample devices.
#[instrument]
pub fn load_devices(path: &Path) -> DeviceLoad {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Device config not found, serving sample devices");
            return DeviceLoad::sample(SampleReason::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            warn!(error = %e, "Failed to read device config, serving sample devices");
            return DeviceLoad::sample(SampleReason::ConfigUnreadable {
                path: path.to_path_buf(),
                error: e.to_string(),
            });
        }
    };

    match serde_json::from_str::<DeviceConfigFile>(&contents) {
        Ok(file) => {
            let devices = file.to_devices();
            info!(count = devices.len(), "Loaded devices from config");
            DeviceLoad {
                devices,
                source: DeviceSource::ConfigFile {
                    path: path.to_path_buf(),
                },
            }
        }
        Err(e) => {
            warn!(error = %e, "Device config is invalid, serving sample devices");
            DeviceLoad::sample(SampleReason::ConfigInvalid {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
        }
    }
}

/// Load preferences from `path`.
///
/// A missing file yields defaults. Unlike the device config, a file the
/// user wrote that fails to parse is an error.
#[instrument]
pub fn load_preferences(path: &Path) -> Result<Preferences> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No preferences file, using defaults");
            return Ok(Preferences::default());
        }
        Err(e) => return Err(WootError::Io(e)),
    };

    toml::from_str(&contents).map_err(|e| {
        WootError::ConfigParse(format!("Invalid preferences {}: {e}", path.display()))
    })
}
