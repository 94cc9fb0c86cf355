//! Sequential per-device runner with skip/failure accounting.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::client::WootilityClient;
use crate::device::Device;

/// What a batch did to each device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BatchAction {
    SwitchProfile { profile_index: usize },
    ApplyEffect { effect_id: String },
}

/// Per-device result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Succeeded,
    Failed,
    /// Not eligible; never attempted.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceResult {
    pub serial: String,
    pub model_name: String,
    pub status: DeviceStatus,
    /// Why the device was skipped or failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Profile name at the requested slot, for profile switches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
}

/// Tallies for a batch. Skips and failures are counted apart, and only
/// attempted devices form the denominator of the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchSummary {
    /// Count one device result.
    pub fn record(&mut self, status: DeviceStatus) {
        self.total += 1;
        match status {
            DeviceStatus::Succeeded => {
                self.attempted += 1;
                self.succeeded += 1;
            }
            DeviceStatus::Failed => {
                self.attempted += 1;
                self.failed += 1;
            }
            DeviceStatus::Skipped => self.skipped += 1,
        }
    }

    pub const fn outcome(&self) -> BatchOutcome {
        if self.attempted == 0 {
            BatchOutcome::NothingAttempted
        } else if self.succeeded == self.attempted {
            BatchOutcome::Complete
        } else if self.succeeded > 0 {
            BatchOutcome::Partial
        } else {
            BatchOutcome::Failed
        }
    }
}

/// How a batch went overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    /// Every attempted device succeeded.
    Complete,
    /// Some attempted devices succeeded.
    Partial,
    /// No attempted device succeeded.
    Failed,
    /// Every device was skipped.
    NothingAttempted,
}

impl BatchOutcome {
    /// Whether anything changed on at least one device.
    pub const fn any_succeeded(self) -> bool {
        matches!(self, Self::Complete | Self::Partial)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    #[serde(flatten)]
    pub action: BatchAction,
    pub outcome: BatchOutcome,
    pub summary: BatchSummary,
    pub results: Vec<DeviceResult>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    fn new(action: BatchAction, results: Vec<DeviceResult>) -> Self {
        let mut summary = BatchSummary::default();
        for result in &results {
            summary.record(result.status);
        }
        let outcome = summary.outcome();
        info!(
            ?outcome,
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            skipped = summary.skipped,
            "Batch finished"
        );
        Self {
            action,
            outcome,
            summary,
            results,
            finished_at: Utc::now(),
        }
    }

    /// Results for devices that succeeded.
    pub fn succeeded(&self) -> impl Iterator<Item = &DeviceResult> {
        self.results
            .iter()
            .filter(|r| r.status == DeviceStatus::Succeeded)
    }
}

fn result(device: &Device, status: DeviceStatus, reason: Option<String>) -> DeviceResult {
    DeviceResult {
        serial: device.serial.clone(),
        model_name: device.model_name.clone(),
        status,
        reason,
        profile_name: None,
    }
}

/// Switch every connected device to `profile_index`.
pub fn switch_all(client: &WootilityClient, devices: &[Device], profile_index: usize) -> BatchReport {
    switch_all_with(client, devices, profile_index, |_| {})
}

/// [`switch_all`], reporting each device result as it lands.
///
/// Devices that are disconnected or have no slot at `profile_index` are
/// skipped.
#[instrument(skip(client, devices, on_result), fields(devices = devices.len()))]
pub fn switch_all_with<F>(
    client: &WootilityClient,
    devices: &[Device],
    profile_index: usize,
    mut on_result: F,
) -> BatchReport
where
    F: FnMut(&DeviceResult),
{
    let mut results = Vec::with_capacity(devices.len());

    for device in devices {
        let mut entry = if !device.connected {
            debug!(serial = %device.serial, "Device not connected, skipping");
            result(device, DeviceStatus::Skipped, Some("not connected".to_string()))
        } else if !device.has_profile(profile_index) {
            warn!(
                "Device {} doesn't have Profile {}",
                device.model_name,
                profile_index + 1
            );
            result(
                device,
                DeviceStatus::Skipped,
                Some(format!(
                    "only {} profiles available",
                    device.profiles.len()
                )),
            )
        } else if client.switch_profile(&device.serial, profile_index) {
            result(device, DeviceStatus::Succeeded, None)
        } else {
            result(
                device,
                DeviceStatus::Failed,
                Some("Wootility did not accept the switch".to_string()),
            )
        };
        entry.profile_name = device.profiles.get(profile_index).cloned();

        on_result(&entry);
        results.push(entry);
    }

    BatchReport::new(BatchAction::SwitchProfile { profile_index }, results)
}

/// Apply `effect_id` to every RGB-capable device.
pub fn apply_effect_all(client: &WootilityClient, devices: &[Device], effect_id: &str) -> BatchReport {
    apply_effect_all_with(client, devices, effect_id, |_| {})
}

/// [`apply_effect_all`], reporting each device result as it lands.
///
/// Devices without RGB support are skipped.
#[instrument(skip(client, devices, on_result), fields(devices = devices.len()))]
pub fn apply_effect_all_with<F>(
    client: &WootilityClient,
    devices: &[Device],
    effect_id: &str,
    mut on_result: F,
) -> BatchReport
where
    F: FnMut(&DeviceResult),
{
    let mut results = Vec::with_capacity(devices.len());

    for device in devices {
        let entry = if !device.rgb_enabled {
            debug!(serial = %device.serial, "No RGB support, skipping");
            result(device, DeviceStatus::Skipped, Some("RGB not supported".to_string()))
        } else if client.apply_rgb_effect(&device.serial, effect_id) {
            result(device, DeviceStatus::Succeeded, None)
        } else {
            result(
                device,
                DeviceStatus::Failed,
                Some("Wootility did not accept the effect".to_string()),
            )
        };

        on_result(&entry);
        results.push(entry);
    }

    BatchReport::new(
        BatchAction::ApplyEffect {
            effect_id: effect_id.to_string(),
        },
        results,
    )
}
