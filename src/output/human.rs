//! Human-friendly output implementation using console styles.

use std::cell::RefCell;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, instrument, trace};

use crate::batch::{BatchOutcome, BatchReport, DeviceResult, DeviceStatus};
use crate::config::DeviceSource;
use crate::device::{Device, Profile};
use crate::error::WootError;
use crate::rgb::RgbEffect;
use crate::theme::WootTheme;

use super::{DeviceProfiles, Output, StatusReport, VersionInfo};

const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    theme: WootTheme,
    spinner: RefCell<Option<ProgressBar>>,
}

impl HumanOutput {
    #[instrument]
    pub fn new(color: bool) -> Self {
        debug!("Creating HumanOutput");
        if !color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        Self {
            theme: WootTheme::default(),
            spinner: RefCell::new(None),
        }
    }

    fn line(&self, tag: &str, style: &Style, message: &str) {
        println!("{} {message}", style.apply_to(tag).bold());
    }

    fn field(&self, name: &str, value: &str) {
        println!(
            "  {}{}",
            self.theme.label.apply_to(format!("{name:<12}")),
            self.theme.value.apply_to(value)
        );
    }

    fn yes_no(value: bool) -> &'static str {
        if value { "yes" } else { "no" }
    }

    fn profile_row(&self, profile: &Profile) {
        let marker = if profile.active { "*" } else { " " };
        let name = if profile.active {
            self.theme.active_profile.apply_to(&profile.name)
        } else {
            self.theme.inactive_profile.apply_to(&profile.name)
        };
        println!(
            "  {marker} {}. {name}  {}",
            profile.number(),
            self.theme.muted.apply_to(&profile.description)
        );
    }

    fn status_tag(&self, status: DeviceStatus) -> String {
        match status {
            DeviceStatus::Succeeded => self.theme.success.apply_to("ok").to_string(),
            DeviceStatus::Failed => self.theme.error.apply_to("failed").to_string(),
            DeviceStatus::Skipped => self.theme.muted.apply_to("skipped").to_string(),
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.borrow_mut().take()
    }
}

impl Output for HumanOutput {
    #[instrument(skip(self))]
    fn success(&self, message: &str) {
        debug!(message, "Outputting success");
        self.line("[OK]", &self.theme.success, message);
    }

    #[instrument(skip(self))]
    fn error(&self, error: &WootError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        if let Some(spinner) = self.take_spinner() {
            spinner.finish_and_clear();
        }
        eprintln!(
            "{} {}",
            self.theme.error.apply_to("[ERR]").bold(),
            console::style(error).bold()
        );
        if let Some(suggestion) = error.suggestion() {
            trace!(suggestion, "Adding suggestion");
            eprintln!(
                "  {} {}",
                self.theme.label.apply_to("Suggestion:"),
                self.theme.muted.apply_to(suggestion)
            );
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Outputting warning");
        self.line("[WARN]", &self.theme.warning, message);
    }

    #[instrument(skip(self))]
    fn info(&self, message: &str) {
        debug!(message, "Outputting info");
        self.line("[INFO]", &self.theme.accent, message);
    }

    #[instrument(skip(self, devices, source), fields(device_count = devices.len()))]
    fn device_list(&self, devices: &[Device], source: &DeviceSource, long: bool) {
        debug!("Outputting device list");
        if let DeviceSource::Sample(reason) = source {
            self.warning(&format!("Using sample data ({})", reason.describe()));
        }

        println!("{}", self.theme.header.apply_to("Wooting Devices:"));
        for device in devices {
            trace!(serial = %device.serial, "Listing device");
            let current = device.current_profile_name().unwrap_or("-");
            println!(
                "  {} ({})  {}",
                device.model_name,
                self.theme.device_serial.apply_to(&device.serial),
                self.theme.active_profile.apply_to(current)
            );
            if long {
                println!(
                    "      {} {}  {} {}  {} {}",
                    self.theme.label.apply_to("connected:"),
                    Self::yes_no(device.connected),
                    self.theme.label.apply_to("rgb:"),
                    Self::yes_no(device.rgb_enabled),
                    self.theme.label.apply_to("profiles:"),
                    device.profiles.join(", ")
                );
            }
        }
    }

    #[instrument(skip(self, device, profiles), fields(serial = %device.serial))]
    fn device_detail(&self, device: &Device, profiles: &[Profile]) {
        debug!("Outputting device detail");
        println!("{}", self.theme.header.apply_to(&device.model_name));
        self.field("Serial", &device.serial);
        self.field("Connected", Self::yes_no(device.connected));
        self.field("RGB", Self::yes_no(device.rgb_enabled));
        if let Some(name) = device.current_profile_name() {
            self.field(
                "Profile",
                &format!("{} ({name})", device.current_profile + 1),
            );
        }
        println!();
        for profile in profiles {
            self.profile_row(profile);
        }
    }

    #[instrument(skip(self, groups), fields(devices = groups.len()))]
    fn profile_list(&self, groups: &[DeviceProfiles]) {
        debug!("Outputting profile list");
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!(
                "{} ({})",
                self.theme.header.apply_to(&group.device.model_name),
                self.theme.device_serial.apply_to(&group.device.serial)
            );
            for profile in &group.profiles {
                self.profile_row(profile);
            }
        }
    }

    #[instrument(skip(self, device, profile), fields(serial = %device.serial))]
    fn profile_switched(&self, device: &Device, profile: &Profile, already_active: bool) {
        debug!(profile = %profile.name, already_active, "Outputting profile switch");
        if already_active {
            self.info(&format!("{} is already the active profile", profile.name));
        } else {
            self.success(&format!(
                "Switched {} to {} (profile {})",
                device.model_name,
                profile.name,
                profile.number()
            ));
        }
    }

    #[instrument(skip(self, effects), fields(count = effects.len()))]
    fn effect_list(&self, effects: &[RgbEffect]) {
        debug!("Outputting effect list");
        println!("{}", self.theme.header.apply_to("RGB Effects:"));
        for effect in effects {
            println!(
                "  {:<14} {:<14} {}  {}",
                effect.id,
                effect.name,
                self.theme.category.apply_to(format!("{:<9}", effect.category)),
                self.theme.muted.apply_to(effect.description)
            );
        }
    }

    #[instrument(skip(self))]
    fn batch_started(&self, message: &str, device_count: usize) {
        debug!("Starting batch spinner");
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("{message} ({device_count} devices)"));
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn batch_progress(&self, result: &DeviceResult) {
        trace!(serial = %result.serial, status = ?result.status, "Batch progress");
        if let Some(spinner) = self.spinner.borrow().as_ref() {
            spinner.set_message(format!("{} ({})", result.model_name, result.serial));
        }
    }

    #[instrument(skip(self, report), fields(outcome = ?report.outcome))]
    fn batch_report(&self, report: &BatchReport, headline: &str) {
        debug!("Outputting batch report");
        if let Some(spinner) = self.take_spinner() {
            spinner.finish_and_clear();
        }

        for result in &report.results {
            let reason = result
                .reason
                .as_deref()
                .map(|r| format!("  {}", self.theme.muted.apply_to(r)))
                .unwrap_or_default();
            println!(
                "  {:<8} {} ({}){reason}",
                self.status_tag(result.status),
                result.model_name,
                self.theme.device_serial.apply_to(&result.serial)
            );
        }

        match report.outcome {
            BatchOutcome::Complete => self.success(headline),
            BatchOutcome::Partial => self.warning(headline),
            BatchOutcome::Failed | BatchOutcome::NothingAttempted => {
                self.line("[FAIL]", &self.theme.error, headline);
            }
        }
    }

    #[instrument(skip(self, status))]
    fn status(&self, status: &StatusReport) {
        debug!("Outputting status");
        println!("{}", self.theme.header.apply_to("Wootility Status"));
        self.field("Wootility", &status.wootility);
        self.field("Mock mode", Self::yes_no(status.mock_mode));
        self.field("Available", Self::yes_no(status.available));
        self.field("Config", &status.config_path);
        let source = match &status.device_source {
            DeviceSource::ConfigFile { .. } => "config file".to_string(),
            DeviceSource::Sample(reason) => format!("sample data ({})", reason.describe()),
        };
        self.field("Devices", &format!("{} from {source}", status.device_count));
        if let Some(path) = &status.preferences_path {
            self.field("Preferences", path);
        }
    }

    #[instrument(skip(self, info))]
    fn version_info(&self, info: &VersionInfo) {
        debug!(version = info.version, "Outputting version info");
        println!(
            "{} {}",
            self.theme.header.apply_to("woot"),
            self.theme.value.apply_to(info.version)
        );
        let sha = if info.git_dirty {
            format!("{} {}", info.git_sha, self.theme.warning.apply_to("(dirty)"))
        } else {
            info.git_sha.to_string()
        };
        self.field("Git SHA", &sha);
        self.field("Built", info.build_timestamp);
        self.field("Rust", info.rustc_version);
        self.field("Target", info.target);
    }
}
