//! Error types for Wootility CLI operations.

use thiserror::Error;

/// Primary error type for Wooting device operations.
#[derive(Error, Debug)]
pub enum WootError {
    // Availability errors
    #[error("Wootility is not installed or not found")]
    WootilityNotFound,

    // Device errors
    #[error("No Wooting devices found")]
    NoDevicesFound,

    #[error("Device not found: {serial}")]
    DeviceNotFound { serial: String },

    // Profile errors
    #[error("{message}")]
    InvalidProfileNumber { message: String },

    #[error("Device '{serial}' has no profile {number} ({available} profiles available)")]
    ProfileIndexOutOfRange {
        serial: String,
        number: usize,
        available: usize,
    },

    // RGB errors
    #[error("Unknown RGB effect: {id}")]
    UnknownEffect { id: String },

    // Configuration errors
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    // Backend errors
    #[error("Wootility request failed: {0}")]
    Backend(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WootError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::WootilityNotFound
                | Self::NoDevicesFound
                | Self::DeviceNotFound { .. }
                | Self::InvalidProfileNumber { .. }
                | Self::ProfileIndexOutOfRange { .. }
                | Self::UnknownEffect { .. }
                | Self::ConfigParse(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::WootilityNotFound => Some(
                "Install Wootility from https://wooting.io/wootility or pass --wootility-path",
            ),
            Self::NoDevicesFound => {
                Some("Make sure your Wooting keyboard is connected and detected by Wootility")
            }
            Self::DeviceNotFound { .. } => Some("Run: woot devices"),
            Self::InvalidProfileNumber { .. } => Some("Use a profile number between 1 and 4"),
            Self::ProfileIndexOutOfRange { .. } => Some("Run: woot profiles --serial <SERIAL>"),
            Self::UnknownEffect { .. } => Some("Run: woot effects"),
            Self::Backend(_) => Some("Check that Wootility is running and the device is connected"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using WootError.
pub type Result<T> = std::result::Result<T, WootError>;
