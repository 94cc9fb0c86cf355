//! Temporary Wootility installs, device configs and preferences.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::cli::CliRunner;

/// Three keyboards; `WK200` has a single profile so it sits out any switch
/// past profile 1.
pub const THREE_DEVICES: &str = r#"{
  "devices": {
    "WK100": { "model_name": "Wooting 60HE", "profiles": ["Default", "Gaming", "Typing"] },
    "WK200": { "model_name": "Wooting Two HE", "profiles": ["Work"] },
    "WK300": {}
  }
}"#;

/// A scratch directory holding a fake Wootility executable, a device config
/// and a preferences file. Cleaned up on drop.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Workspace with an installed Wootility and no device config.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("Wootility.exe"), b"").expect("write fake wootility");
        Self { dir }
    }

    /// Workspace whose device config holds `json`.
    #[must_use]
    pub fn with_config(json: &str) -> Self {
        let ws = Self::new();
        ws.write_config(json);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn wootility(&self) -> PathBuf {
        self.path().join("Wootility.exe")
    }

    pub fn config(&self) -> PathBuf {
        self.path().join("config.json")
    }

    pub fn preferences(&self) -> PathBuf {
        self.path().join("preferences.toml")
    }

    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_config(&self, json: &str) {
        fs::write(self.config(), json).expect("write device config");
    }

    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_preferences(&self, toml: &str) {
        fs::write(self.preferences(), toml).expect("write preferences");
    }

    /// Runner pointed at this workspace through the environment.
    #[must_use]
    pub fn runner(&self) -> CliRunner {
        CliRunner::new()
            .with_env("WOOT_WOOTILITY_PATH", &self.wootility().to_string_lossy())
            .with_env("WOOT_CONFIG", &self.config().to_string_lossy())
            .with_env("WOOT_PREFERENCES", &self.preferences().to_string_lossy())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
