//! CLI argument definitions and command dispatch.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::rgb::EffectCategory;

/// Wooting CLI - View keyboards, switch profiles and apply RGB effects via Wootility.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output optimized for AI agents.
#[derive(Parser, Debug)]
#[command(name = "woot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "WOOT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json (optimized for AI agents)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (repeat for more detail: -v, -vv, -vvv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Path to the Wootility executable (skips install detection)
    #[arg(long, global = true, env = "WOOT_WOOTILITY_PATH", value_name = "PATH")]
    pub wootility_path: Option<PathBuf>,

    /// Device config JSON to read instead of the default location
    #[arg(long, global = true, env = "WOOT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preferences TOML file
    #[arg(long, global = true, env = "WOOT_PREFERENCES", value_name = "PATH")]
    pub preferences: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Devices ===
    /// List Wooting keyboards
    #[command(visible_alias = "list")]
    Devices(DevicesArgs),

    /// Show one keyboard and its profiles
    Info(InfoArgs),

    // === Profiles ===
    /// List profiles for one or all keyboards
    Profiles(ProfilesArgs),

    /// Switch one keyboard to a profile
    Switch(SwitchArgs),

    /// Switch every connected keyboard to the same profile
    QuickSwitch(QuickSwitchArgs),

    // === RGB ===
    /// List the available RGB effects
    Effects(EffectsArgs),

    /// Apply an RGB effect to every RGB keyboard (or one)
    ApplyEffect(ApplyEffectArgs),

    // === Diagnostics ===
    /// Show Wootility detection and config status
    Status,

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct DevicesArgs {
    /// Show connection, RGB and profile details
    #[arg(long, short = 'l')]
    pub long: bool,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Device serial number
    pub serial: String,
}

#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Only show profiles for this device
    #[arg(long, short = 's')]
    pub serial: Option<String>,
}

#[derive(Args, Debug)]
pub struct SwitchArgs {
    /// Device serial number
    pub serial: String,

    /// Profile number (1-4)
    #[arg(allow_hyphen_values = true)]
    pub number: String,
}

#[derive(Args, Debug)]
pub struct QuickSwitchArgs {
    /// Profile number (1-4); defaults to `default_profile` from preferences
    #[arg(allow_hyphen_values = true)]
    pub number: Option<String>,
}

#[derive(Args, Debug)]
pub struct EffectsArgs {
    /// Only show effects in this category
    #[arg(long, short = 'c')]
    pub category: Option<EffectCategory>,
}

#[derive(Args, Debug)]
pub struct ApplyEffectArgs {
    /// Effect id (see `woot effects`)
    pub effect: String,

    /// Apply to this device only
    #[arg(long, short = 's')]
    pub serial: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
