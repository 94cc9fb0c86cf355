//! Configuration module.
//!
//! Locates the Wootility install, reads the Wooting Profile Switcher device
//! config (best-effort, with a sample-data fallback), and loads the CLI's
//! own preferences file.

mod loader;
mod path;
mod schema;

pub use loader::{DeviceLoad, DeviceSource, SampleReason, load_devices, load_preferences};
pub use path::{
    WootilityTarget, default_device_config_path, default_preferences_path, expand_home, home_dir,
    install_candidates, resolve_wootility,
};
pub use schema::{DeviceConfigFile, DeviceEntry, Preferences};
