//! Robot mode JSON output implementation.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::batch::{BatchReport, DeviceResult};
use crate::config::DeviceSource;
use crate::device::{Device, Profile};
use crate::error::WootError;
use crate::rgb::RgbEffect;

use super::{DeviceProfiles, Output, RobotFormat, StatusReport, VersionInfo};

/// JSON output implementation for AI agents and scripting.
///
/// Every command prints exactly one JSON document on stdout. Errors go to
/// stderr so a caller can tell them apart without parsing.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Output any serializable data as JSON to stdout.
    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        let json = match self.format {
            RobotFormat::Json => {
                trace!("Serializing as pretty JSON");
                serde_json::to_string_pretty(data).expect("serialization failed")
            }
            RobotFormat::JsonCompact => {
                trace!("Serializing as compact JSON");
                serde_json::to_string(data).expect("serialization failed")
            }
        };
        trace!(json_len = json.len(), "JSON serialized");
        println!("{json}");
    }

    /// Output pretty JSON to stderr.
    #[instrument(skip(self, data))]
    fn output_json_pretty_stderr<T: Serialize>(&self, data: &T) {
        let json = serde_json::to_string_pretty(data).expect("serialization failed");
        trace!(json_len = json.len(), "JSON error serialized");
        eprintln!("{json}");
    }
}

/// Error payload written to stderr.
pub(crate) fn error_json(error: &WootError) -> serde_json::Value {
    serde_json::json!({
        "error": true,
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "recoverable": error.is_user_recoverable(),
    })
}

/// Device list payload. `source` tells callers whether the devices are real
/// or the built-in samples.
pub(crate) fn device_list_json(devices: &[Device], source: &DeviceSource) -> serde_json::Value {
    serde_json::json!({
        "devices": devices,
        "count": devices.len(),
        "source": source,
    })
}

impl Output for RobotOutput {
    #[instrument(skip(self))]
    fn success(&self, message: &str) {
        debug!(message, "Robot: success");
        self.output_json(&serde_json::json!({
            "success": true,
            "message": message
        }));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &WootError) {
        debug!(error = %error, "Robot: error");
        self.output_json_pretty_stderr(&error_json(error));
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
        self.output_json(&serde_json::json!({
            "warning": true,
            "message": message
        }));
    }

    #[instrument(skip(self))]
    fn info(&self, message: &str) {
        debug!(message, "Robot: info");
        self.output_json(&serde_json::json!({
            "info": true,
            "message": message
        }));
    }

    // Robot output always carries every field; `long` only affects text.
    #[instrument(skip(self, devices, source), fields(count = devices.len()))]
    fn device_list(&self, devices: &[Device], source: &DeviceSource, _long: bool) {
        debug!("Robot: device_list");
        self.output_json(&device_list_json(devices, source));
    }

    #[instrument(skip(self, device, profiles), fields(serial = %device.serial))]
    fn device_detail(&self, device: &Device, profiles: &[Profile]) {
        debug!("Robot: device_detail");
        self.output_json(&DeviceProfiles {
            device: device.clone(),
            profiles: profiles.to_vec(),
        });
    }

    #[instrument(skip(self, groups), fields(devices = groups.len()))]
    fn profile_list(&self, groups: &[DeviceProfiles]) {
        debug!("Robot: profile_list");
        self.output_json(groups);
    }

    #[instrument(skip(self, device, profile), fields(serial = %device.serial))]
    fn profile_switched(&self, device: &Device, profile: &Profile, already_active: bool) {
        debug!(profile = %profile.name, already_active, "Robot: profile_switched");
        self.output_json(&serde_json::json!({
            "success": true,
            "serial": device.serial,
            "model_name": device.model_name,
            "profile": profile,
            "already_active": already_active,
        }));
    }

    #[instrument(skip(self, effects), fields(count = effects.len()))]
    fn effect_list(&self, effects: &[RgbEffect]) {
        debug!("Robot: effect_list");
        self.output_json(effects);
    }

    // A single document per command: progress events are not streamed.
    fn batch_started(&self, message: &str, device_count: usize) {
        trace!(message, device_count, "Robot: batch_started");
    }

    fn batch_progress(&self, result: &DeviceResult) {
        trace!(serial = %result.serial, status = ?result.status, "Robot: batch_progress");
    }

    #[instrument(skip(self, report), fields(outcome = ?report.outcome))]
    fn batch_report(&self, report: &BatchReport, headline: &str) {
        debug!(headline, "Robot: batch_report");
        self.output_json(&serde_json::json!({
            "success": report.outcome.any_succeeded(),
            "message": headline,
            "report": report,
        }));
    }

    #[instrument(skip(self, status))]
    fn status(&self, status: &StatusReport) {
        debug!(available = status.available, "Robot: status");
        self.output_json(status);
    }

    #[instrument(skip(self, info))]
    fn version_info(&self, info: &VersionInfo) {
        debug!(version = info.version, "Robot: version_info");
        self.output_json(info);
    }
}
