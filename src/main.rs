//! Wooting CLI - View keyboards, switch profiles and apply RGB effects.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use woot::batch::{self, BatchReport};
use woot::cli::{self, Cli, Commands};
use woot::client::{ClientConfig, WootilityClient};
use woot::config::{self, DeviceLoad, Preferences};
use woot::device::Device;
use woot::error::{Result, WootError};
use woot::logging;
use woot::output::{
    DeviceProfiles, Output, OutputMode, StatusReport, VersionInfo, batch_headline,
};
use woot::rgb;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> bool {
        matches!(option_env!("VERGEN_GIT_DIRTY"), Some("true"))
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    let output = OutputMode::from_cli(&cli).into_output();

    match run(&cli, output.as_ref()) {
        Ok(code) => code,
        Err(e) => {
            output.error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &dyn Output) -> Result<ExitCode> {
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::Devices(args)) => cmd_devices(cli, out, args),
        Some(Commands::Info(args)) => cmd_info(cli, out, args),
        Some(Commands::Profiles(args)) => cmd_profiles(cli, out, args),
        Some(Commands::Switch(args)) => cmd_switch(cli, out, args),
        Some(Commands::QuickSwitch(args)) => cmd_quick_switch(cli, out, args),
        Some(Commands::Effects(args)) => cmd_effects(out, args),
        Some(Commands::ApplyEffect(args)) => cmd_apply_effect(cli, out, args),
        Some(Commands::Status) => cmd_status(cli, out),
        Some(Commands::Version) => cmd_version(out),
        Some(Commands::Completions(args)) => cmd_completions(args),
    }
}

// === Session ===

/// Everything a command needs: preferences merged with flags, and a client.
struct Session {
    client: WootilityClient,
    preferences: Preferences,
    preferences_path: Option<PathBuf>,
}

impl Session {
    /// Load preferences and build the client. Flags win over preferences.
    fn open(cli: &Cli) -> Result<Self> {
        let preferences_path = match &cli.preferences {
            Some(path) => Some(config::expand_home(path)?),
            None => config::default_preferences_path().ok(),
        };
        let preferences = match &preferences_path {
            Some(path) => config::load_preferences(path)?,
            None => Preferences::default(),
        };
        debug!(?preferences, "Preferences loaded");

        let mut client_config = ClientConfig::new();
        if let Some(path) = cli
            .wootility_path
            .as_ref()
            .or(preferences.wootility_path.as_ref())
        {
            client_config = client_config.with_wootility_path(config::expand_home(path)?);
        }
        if let Some(path) = cli.config.as_ref().or(preferences.config_path.as_ref()) {
            client_config = client_config.with_config_path(config::expand_home(path)?);
        }

        Ok(Self {
            client: WootilityClient::new(client_config)?,
            preferences,
            preferences_path,
        })
    }

    /// Fail unless Wootility is installed (or mocked).
    fn require_available(&self) -> Result<()> {
        if self.client.is_available() {
            Ok(())
        } else {
            Err(WootError::WootilityNotFound)
        }
    }

    /// Availability check followed by a non-empty device load.
    fn devices(&self) -> Result<DeviceLoad> {
        self.require_available()?;
        let load = self.client.load_devices();
        if load.devices.is_empty() {
            return Err(WootError::NoDevicesFound);
        }
        Ok(load)
    }

    fn device(&self, serial: &str) -> Result<Device> {
        self.devices()?
            .devices
            .into_iter()
            .find(|d| d.serial == serial)
            .ok_or_else(|| WootError::DeviceNotFound {
                serial: serial.to_string(),
            })
    }
}

// === Quick Start (Robot Mode Optimized) ===

/// Prints quick-start help optimized for both humans and AI agents.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn print_quick_start(cli: &Cli) -> Result<ExitCode> {
    if cli.use_json() {
        print_robot_quick_start();
    } else {
        print_human_quick_start();
    }
    Ok(ExitCode::SUCCESS)
}

fn print_robot_quick_start() {
    let help = RobotQuickStart {
        tool: "woot",
        version: build_info::VERSION,
        description: "Wooting keyboard profile and RGB control via Wootility",
        discovery: RobotDiscovery {
            list_devices: "woot devices --robot",
            device_info: "woot info <SERIAL> --robot",
            list_profiles: "woot profiles --robot",
            status: "woot status --robot",
        },
        profiles: RobotProfiles {
            switch_one: "woot switch <SERIAL> <1-4>",
            switch_all: "woot quick-switch <1-4>",
        },
        rgb: RobotRgb {
            list_effects: "woot effects --robot",
            apply_all: "woot apply-effect <EFFECT_ID>",
            apply_one: "woot apply-effect <EFFECT_ID> --serial <SERIAL>",
        },
        output_modes: OutputModes {
            human: "--format=text (default)",
            robot: "--robot or --format=json",
            compact: "--format=json-compact",
        },
        profile_numbers: "Profiles are numbered 1-4 on the command line",
    };

    match serde_json::to_string_pretty(&help) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize quick start: {e}"),
    }
}

fn print_human_quick_start() {
    println!(
        "{} {} - Wooting profile & RGB control\n",
        style("woot").bold().cyan(),
        build_info::VERSION
    );

    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  List keyboards", style("woot devices").green());
    println!("  {}  Profiles per keyboard", style("woot profiles").green());
    println!("  {}  Switch one keyboard", style("woot switch WK001 2").green());
    println!("  {}  Switch all keyboards", style("woot quick-switch 2").green());
    println!("  {}  List RGB effects", style("woot effects").green());
    println!(
        "  {}  Apply an effect",
        style("woot apply-effect breathing").green()
    );
    println!("  {}  Detection status", style("woot status").green());
    println!();

    println!("{}", style("ROBOT MODE (for AI agents)").bold().underlined());
    println!();
    println!("  {}  JSON output", style("woot --robot <command>").cyan());
    println!("  {}  Quick-start JSON", style("woot --robot").cyan());
    println!();

    println!("Run {} for full help", style("woot --help").yellow());
}

// === Robot Mode JSON Structures ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    discovery: RobotDiscovery,
    profiles: RobotProfiles,
    rgb: RobotRgb,
    output_modes: OutputModes,
    profile_numbers: &'static str,
}

#[derive(Serialize)]
struct RobotDiscovery {
    list_devices: &'static str,
    device_info: &'static str,
    list_profiles: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct RobotProfiles {
    switch_one: &'static str,
    switch_all: &'static str,
}

#[derive(Serialize)]
struct RobotRgb {
    list_effects: &'static str,
    apply_all: &'static str,
    apply_one: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

// === Commands ===

fn cmd_devices(cli: &Cli, out: &dyn Output, args: &cli::DevicesArgs) -> Result<ExitCode> {
    let session = Session::open(cli)?;
    let load = session.devices()?;
    out.device_list(&load.devices, &load.source, args.long);
    Ok(ExitCode::SUCCESS)
}

fn cmd_info(cli: &Cli, out: &dyn Output, args: &cli::InfoArgs) -> Result<ExitCode> {
    let session = Session::open(cli)?;
    let device = session.device(&args.serial)?;
    let profiles = session.client.profiles(&device.serial);
    out.device_detail(&device, &profiles);
    Ok(ExitCode::SUCCESS)
}

fn cmd_profiles(cli: &Cli, out: &dyn Output, args: &cli::ProfilesArgs) -> Result<ExitCode> {
    let session = Session::open(cli)?;
    let devices = match &args.serial {
        Some(serial) => vec![session.device(serial)?],
        None => session.devices()?.devices,
    };

    let groups: Vec<DeviceProfiles> = devices
        .into_iter()
        .map(|device| DeviceProfiles {
            profiles: session.client.profiles(&device.serial),
            device,
        })
        .collect();
    out.profile_list(&groups);
    Ok(ExitCode::SUCCESS)
}

fn cmd_switch(cli: &Cli, out: &dyn Output, args: &cli::SwitchArgs) -> Result<ExitCode> {
    let session = Session::open(cli)?;
    let index = session.client.validate_profile_number(&args.number)?;
    let device = session.device(&args.serial)?;

    if !device.has_profile(index) {
        return Err(WootError::ProfileIndexOutOfRange {
            serial: device.serial,
            number: index + 1,
            available: device.profiles.len(),
        });
    }

    let profiles = device.profiles_with_active(index);
    let profile = &profiles[index];

    if device.current_profile == index {
        info!(serial = %device.serial, profile = %profile.name, "Profile already active");
        if session.preferences.enable_notifications || cli.use_json() {
            out.profile_switched(&device, profile, true);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if !session.client.switch_profile(&device.serial, index) {
        return Err(WootError::Backend(format!(
            "Failed to switch {} to {}",
            device.model_name, profile.name
        )));
    }
    out.profile_switched(&device, profile, false);
    Ok(ExitCode::SUCCESS)
}

fn cmd_quick_switch(cli: &Cli, out: &dyn Output, args: &cli::QuickSwitchArgs) -> Result<ExitCode> {
    let session = Session::open(cli)?;
    let number = args
        .number
        .as_deref()
        .or(session.preferences.default_profile.as_deref())
        .ok_or_else(|| WootError::InvalidProfileNumber {
            message: "Profile number is required (or set default_profile in preferences)"
                .to_string(),
        })?;
    let index = session.client.validate_profile_number(number)?;
    let devices = session.devices()?.devices;

    out.batch_started(
        &format!("Switching all devices to Profile {}", index + 1),
        devices.len(),
    );
    let report = batch::switch_all_with(&session.client, &devices, index, |r| {
        out.batch_progress(r);
    });
    Ok(finish_batch(out, &report, None))
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_effects(out: &dyn Output, args: &cli::EffectsArgs) -> Result<ExitCode> {
    let effects: Vec<_> = rgb::catalog()
        .into_iter()
        .filter(|e| args.category.is_none_or(|c| e.category == c))
        .collect();
    out.effect_list(&effects);
    Ok(ExitCode::SUCCESS)
}

fn cmd_apply_effect(cli: &Cli, out: &dyn Output, args: &cli::ApplyEffectArgs) -> Result<ExitCode> {
    let effect = rgb::find_effect(&args.effect).ok_or_else(|| WootError::UnknownEffect {
        id: args.effect.clone(),
    })?;
    let session = Session::open(cli)?;
    let devices = match &args.serial {
        Some(serial) => vec![session.device(serial)?],
        None => session.devices()?.devices,
    };

    out.batch_started(&format!("Applying {}", effect.name), devices.len());
    let report = batch::apply_effect_all_with(&session.client, &devices, effect.id, |r| {
        out.batch_progress(r);
    });
    Ok(finish_batch(out, &report, Some(effect.name)))
}

/// Print the report; a batch where nothing succeeded exits non-zero.
fn finish_batch(out: &dyn Output, report: &BatchReport, effect_name: Option<&str>) -> ExitCode {
    let headline = batch_headline(report, effect_name);
    out.batch_report(report, &headline);
    if report.outcome.any_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_status(cli: &Cli, out: &dyn Output) -> Result<ExitCode> {
    let session = Session::open(cli)?;
    let client = &session.client;
    let load = client.load_devices();

    out.status(&StatusReport {
        wootility: client.target().describe(),
        mock_mode: client.is_mock(),
        available: client.is_available(),
        config_path: client.config_path().display().to_string(),
        device_source: load.source,
        device_count: load.devices.len(),
        preferences_path: session
            .preferences_path
            .as_ref()
            .map(|p| p.display().to_string()),
    });
    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(out: &dyn Output) -> Result<ExitCode> {
    out.version_info(&VersionInfo {
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty(),
        build_timestamp: build_info::build_timestamp(),
        rustc_version: build_info::rustc_semver(),
        target: build_info::target(),
    });
    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &cli::CompletionsArgs) -> Result<ExitCode> {
    clap_complete::generate(args.shell, &mut Cli::command(), "woot", &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
