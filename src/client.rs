//! Client for the Wootility desktop application.
//!
//! The single point of contact with Wootility. It resolves the install
//! once at construction, serves devices from the Wooting Profile Switcher
//! config (or sample data), derives profiles, and forwards profile and
//! lighting requests to a [`WootilityBackend`].
//!
//! Public operations never fail outward: lookups return best-effort values
//! and actions return `bool`. The one exception is profile-number
//! validation, which returns a structured error for the caller to display.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::{
    self, DeviceLoad, WootilityTarget, default_device_config_path, install_candidates,
    resolve_wootility,
};
use crate::device::{BoxedBackend, Device, ExternalBackend, Profile, mock::MockBackend};
use crate::error::{Result, WootError};
use crate::rgb::{self, RgbEffect};

/// Lowest profile number accepted from users.
pub const MIN_PROFILE_NUMBER: usize = 1;

/// Highest profile number accepted from users.
pub const MAX_PROFILE_NUMBER: usize = 4;

/// Explicit client configuration, built once per command.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Wootility executable. When unset the install locations are probed.
    pub wootility_path: Option<PathBuf>,
    /// Device config file. When unset the platform default is used.
    pub config_path: Option<PathBuf>,
    /// Install locations to probe. When unset the platform list is used.
    pub install_candidates: Option<Vec<PathBuf>>,
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_wootility_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wootility_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_install_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.install_candidates = Some(candidates);
        self
    }
}

/// Why a profile number was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileNumberError {
    #[error("Profile number must be a number")]
    NotANumber,
    #[error("Profile number must be between 1 and 4")]
    OutOfRange,
}

impl From<ProfileNumberError> for WootError {
    fn from(err: ProfileNumberError) -> Self {
        Self::InvalidProfileNumber {
            message: err.to_string(),
        }
    }
}

/// Parse a user-supplied profile number (1-4) into a 0-based index.
///
/// Reads an optional sign and the leading run of digits after any leading
/// whitespace, ignoring whatever follows, so `"2.0"` and `"3rd"` are
/// accepted. Input with no leading digits is not a number.
pub fn validate_profile_number(input: &str) -> std::result::Result<usize, ProfileNumberError> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(ProfileNumberError::NotANumber);
    }

    // Too many digits for usize is still a number, just far out of range.
    let number = unsigned[..digit_count]
        .parse::<usize>()
        .map_err(|_| ProfileNumberError::OutOfRange)?;
    if negative || !(MIN_PROFILE_NUMBER..=MAX_PROFILE_NUMBER).contains(&number) {
        return Err(ProfileNumberError::OutOfRange);
    }

    Ok(number - 1)
}

/// Client bound to one resolved Wootility target.
pub struct WootilityClient {
    target: WootilityTarget,
    config_path: PathBuf,
    backend: BoxedBackend,
}

impl std::fmt::Debug for WootilityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WootilityClient")
            .field("target", &self.target)
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

impl WootilityClient {
    /// Resolve the target and pick the matching backend.
    ///
    /// # Errors
    ///
    /// Returns an error only if no default config location can be derived
    /// (no home directory).
    #[instrument(skip(config))]
    pub fn new(config: ClientConfig) -> Result<Self> {
        let (target, config_path) = Self::resolve(&config)?;
        let backend: BoxedBackend = match &target {
            WootilityTarget::Installed(path) => Box::new(ExternalBackend::new(path)),
            // Never reached: mock mode answers requests itself.
            WootilityTarget::Mock => Box::new(MockBackend::new()),
        };
        Ok(Self {
            target,
            config_path,
            backend,
        })
    }

    /// Build a client with an injected backend.
    ///
    /// # Errors
    ///
    /// Same as [`WootilityClient::new`].
    pub fn with_backend(config: ClientConfig, backend: BoxedBackend) -> Result<Self> {
        let (target, config_path) = Self::resolve(&config)?;
        Ok(Self {
            target,
            config_path,
            backend,
        })
    }

    fn resolve(config: &ClientConfig) -> Result<(WootilityTarget, PathBuf)> {
        let candidates = match &config.install_candidates {
            Some(list) => list.clone(),
            None => install_candidates(&config::home_dir().unwrap_or_default()),
        };
        let target = resolve_wootility(config.wootility_path.as_deref(), &candidates);

        let config_path = match &config.config_path {
            Some(path) => path.clone(),
            None => default_device_config_path()?,
        };

        info!(
            target = %target.describe(),
            config = %config_path.display(),
            "Wootility client ready"
        );
        Ok((target, config_path))
    }

    pub const fn target(&self) -> &WootilityTarget {
        &self.target
    }

    pub const fn is_mock(&self) -> bool {
        self.target.is_mock()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Whether Wootility can be reached.
    ///
    /// True in mock mode, otherwise true when the resolved executable exists.
    pub fn is_available(&self) -> bool {
        let available = match &self.target {
            WootilityTarget::Mock => true,
            WootilityTarget::Installed(path) => path.exists(),
        };
        debug!(available, target = %self.target.describe(), "Checked availability");
        available
    }

    /// Load devices together with where they came from.
    pub fn load_devices(&self) -> DeviceLoad {
        config::load_devices(&self.config_path)
    }

    /// All known devices. Falls back to the sample set, never fails.
    pub fn devices(&self) -> Vec<Device> {
        self.load_devices().devices
    }

    /// Look up one device by serial.
    pub fn device(&self, serial: &str) -> Option<Device> {
        self.devices().into_iter().find(|d| d.serial == serial)
    }

    /// Active profile index for `serial`, 0 when the device is unknown.
    ///
    /// Wootility reports no live telemetry, so this is the value from the
    /// loaded device data.
    pub fn current_profile(&self, serial: &str) -> usize {
        self.device(serial).map_or(0, |d| d.current_profile)
    }

    /// Profiles of `serial`, empty when the device is unknown.
    #[instrument(skip(self))]
    pub fn profiles(&self, serial: &str) -> Vec<Profile> {
        match self.device(serial) {
            Some(device) => device.profiles_with_active(device.current_profile),
            None => {
                debug!("Unknown device, no profiles");
                Vec::new()
            }
        }
    }

    /// Make `profile_index` active on `serial`. Returns whether it worked.
    #[instrument(skip(self))]
    pub fn switch_profile(&self, serial: &str, profile_index: usize) -> bool {
        info!("Switching device {serial} to profile {profile_index}");
        if self.is_mock() {
            return true;
        }
        match self.backend.switch_profile(serial, profile_index) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Profile switch failed");
                false
            }
        }
    }

    /// The RGB effect catalog.
    pub fn rgb_effects(&self) -> Vec<RgbEffect> {
        rgb::catalog()
    }

    /// Apply `effect_id` on `serial`. The id is not validated.
    #[instrument(skip(self))]
    pub fn apply_rgb_effect(&self, serial: &str, effect_id: &str) -> bool {
        info!("Applying RGB effect {effect_id} to device {serial}");
        if self.is_mock() {
            return true;
        }
        match self.backend.apply_rgb_effect(serial, effect_id) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "RGB effect failed");
                false
            }
        }
    }

    /// See [`validate_profile_number`].
    pub fn validate_profile_number(
        &self,
        input: &str,
    ) -> std::result::Result<usize, ProfileNumberError> {
        validate_profile_number(input)
    }
}
