//! Path resolution for the Wootility install and its config files.
//!
//! Supports absolute paths, "~" home directory expansion, and the fixed
//! per-platform install locations probed when no explicit path is given.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, WootError};

/// Directory (under the per-user config root) holding the device config.
pub const DEVICE_CONFIG_DIR: &str = "WootingProfileSwitcher";

/// Device config file name.
pub const DEVICE_CONFIG_FILE: &str = "config.json";

/// Preferences file, relative to the per-user config root.
pub const PREFERENCES_RELATIVE: [&str; 2] = ["woot", "preferences.toml"];

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WootilityTarget {
    /// A concrete executable path (may or may not exist).
    Installed(PathBuf),
    /// No install found; the client serves sample data.
    Mock,
}

impl WootilityTarget {
    /// Identifier shown to users for the mock target.
    pub const MOCK_ID: &'static str = "wootility-mock";

    pub const fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Installed(path) => Some(path),
            Self::Mock => None,
        }
    }

    /// Display form: the path, or the mock identifier.
    pub fn describe(&self) -> String {
        match self {
            Self::Installed(path) => path.display().to_string(),
            Self::Mock => Self::MOCK_ID.to_string(),
        }
    }
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| WootError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// Expand a leading `~` to the home directory. Other paths are returned as-is.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return Ok(resolved);
    }
    Ok(path.to_path_buf())
}

/// Known Wootility install locations for the current platform, in probe order.
pub fn install_candidates(home: &Path) -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        vec![
            PathBuf::from(r"C:\Program Files\WootingUtility\WootingUtility.exe"),
            PathBuf::from(r"C:\Program Files (x86)\WootingUtility\WootingUtility.exe"),
            home.join("AppData")
                .join("Local")
                .join("WootingUtility")
                .join("WootingUtility.exe"),
            PathBuf::from(r"C:\Program Files\Wooting\Wootility\Wootility.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Wooting\Wootility\Wootility.exe"),
        ]
    } else if cfg!(target_os = "macos") {
        vec![
            PathBuf::from("/Applications/Wootility.app"),
            home.join("Applications").join("Wootility.app"),
        ]
    } else {
        vec![
            PathBuf::from("/usr/bin/wootility"),
            PathBuf::from("/opt/Wootility/wootility"),
            home.join(".local").join("bin").join("wootility"),
            home.join("Applications").join("Wootility.AppImage"),
        ]
    }
}

/// Pick the Wootility target.
///
/// An explicit path is used as-is even if it does not exist; the
/// availability check reports that case. Otherwise the first existing
/// candidate wins, and [`WootilityTarget::Mock`] is the fallback.
pub fn resolve_wootility(explicit: Option<&Path>, candidates: &[PathBuf]) -> WootilityTarget {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Using explicit Wootility path");
        return WootilityTarget::Installed(path.to_path_buf());
    }

    for candidate in candidates {
        trace!(candidate = %candidate.display(), "Probing install location");
        if candidate.exists() {
            debug!(path = %candidate.display(), "Found Wootility install");
            return WootilityTarget::Installed(candidate.clone());
        }
    }

    debug!("No Wootility install found, using mock target");
    WootilityTarget::Mock
}

/// Per-user root for the device config: `%APPDATA%`, else the platform
/// config directory, else the home directory.
fn device_config_root() -> Result<PathBuf> {
    if let Some(appdata) = env::var_os("APPDATA").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(appdata));
    }
    match dirs::config_dir() {
        Some(dir) => Ok(dir),
        None => home_dir(),
    }
}

/// Default location of the Wooting Profile Switcher device config.
pub fn default_device_config_path() -> Result<PathBuf> {
    Ok(device_config_root()?
        .join(DEVICE_CONFIG_DIR)
        .join(DEVICE_CONFIG_FILE))
}

/// Default location of the CLI preferences file.
pub fn default_preferences_path() -> Result<PathBuf> {
    let root = match dirs::config_dir() {
        Some(dir) => dir,
        None => home_dir()?,
    };
    Ok(PREFERENCES_RELATIVE
        .iter()
        .fold(root, |path, part| path.join(part)))
}
