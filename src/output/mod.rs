//! Output mode abstraction for robot and human output.

use serde::Serialize;

use crate::batch::{BatchAction, BatchOutcome, BatchReport, DeviceResult};
use crate::cli::Cli;
use crate::config::DeviceSource;
use crate::device::{Device, Profile};
use crate::error::WootError;
use crate::rgb::RgbEffect;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// A device with its derived profiles, for grouped listings.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceProfiles {
    #[serde(flatten)]
    pub device: Device,
    #[serde(rename = "profile_list")]
    pub profiles: Vec<Profile>,
}

/// Snapshot of client resolution for `woot status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub wootility: String,
    pub mock_mode: bool,
    pub available: bool,
    pub config_path: String,
    pub device_source: DeviceSource,
    pub device_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<String>,
}

/// Build metadata for `woot version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
}

/// One-line summary of a batch, phrased per outcome tier.
///
/// `effect_name` is used for RGB batches; profile batches name the
/// profile from the first device that switched.
pub fn batch_headline(report: &BatchReport, effect_name: Option<&str>) -> String {
    let summary = &report.summary;
    match &report.action {
        BatchAction::SwitchProfile { profile_index } => {
            let number = profile_index + 1;
            match report.outcome {
                BatchOutcome::Complete => {
                    let name = report
                        .succeeded()
                        .find_map(|r| r.profile_name.clone())
                        .unwrap_or_else(|| format!("Profile {number}"));
                    if summary.succeeded == 1 {
                        format!("Switched to {name}")
                    } else {
                        format!("Switched {} devices to {name}", summary.succeeded)
                    }
                }
                BatchOutcome::Partial => format!(
                    "Switched {}/{} devices to Profile {number}",
                    summary.succeeded, summary.attempted
                ),
                BatchOutcome::Failed | BatchOutcome::NothingAttempted => {
                    format!("Failed to switch to Profile {number}")
                }
            }
        }
        BatchAction::ApplyEffect { effect_id } => {
            let name = effect_name.unwrap_or(effect_id);
            match report.outcome {
                BatchOutcome::Complete => {
                    format!("{name} applied to {} device(s)", summary.succeeded)
                }
                BatchOutcome::Partial => format!(
                    "{name} applied to {}/{} devices",
                    summary.succeeded, summary.attempted
                ),
                BatchOutcome::Failed | BatchOutcome::NothingAttempted => {
                    format!("Failed to apply {name}")
                }
            }
        }
    }
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for AI agents and scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human { color: bool },
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human {
                color: !cli.no_color,
            }
        }
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { color } => Box::new(HumanOutput::new(color)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    // Basic messages
    fn success(&self, message: &str);
    fn error(&self, error: &WootError);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);

    // Devices and profiles
    fn device_list(&self, devices: &[Device], source: &DeviceSource, long: bool);
    fn device_detail(&self, device: &Device, profiles: &[Profile]);
    fn profile_list(&self, groups: &[DeviceProfiles]);
    fn profile_switched(&self, device: &Device, profile: &Profile, already_active: bool);

    // RGB
    fn effect_list(&self, effects: &[RgbEffect]);

    // Batch operations
    /// Announce a multi-device batch before the first request.
    fn batch_started(&self, message: &str, device_count: usize);
    /// One device finished.
    fn batch_progress(&self, result: &DeviceResult);
    /// Final report with a one-line headline.
    fn batch_report(&self, report: &BatchReport, headline: &str);

    // Metadata
    fn status(&self, status: &StatusReport);
    fn version_info(&self, info: &VersionInfo);
}
