//! Device abstraction layer for Wooting keyboards.
//!
//! Wootility owns the hardware. This module models what it reports
//! (devices and their profile slots) and defines the port through which
//! state-changing requests are sent to it, so tests can substitute a
//! recording fake for the real application.

mod external;
mod info;
pub mod mock;

pub use external::ExternalBackend;
pub use info::{
    DEFAULT_PROFILE_NAMES, Device, Profile, UNKNOWN_MODEL, profile_description, sample_devices,
};

use std::sync::Arc;

use crate::error::Result;

/// Requests that change keyboard state inside Wootility.
///
/// Implementations report failure through `Err`; the client converts
/// those into `false` so that callers never see a backend fault directly.
pub trait WootilityBackend {
    /// Make `profile_index` (0-based) the active profile on `serial`.
    ///
    /// # Errors
    ///
    /// Returns an error if Wootility rejects or cannot receive the request.
    fn switch_profile(&self, serial: &str, profile_index: usize) -> Result<()>;

    /// Apply the RGB effect `effect_id` on `serial`.
    ///
    /// The id is passed through unvalidated.
    ///
    /// # Errors
    ///
    /// Returns an error if Wootility rejects or cannot receive the request.
    fn apply_rgb_effect(&self, serial: &str, effect_id: &str) -> Result<()>;
}

/// Type alias for boxed trait object.
pub type BoxedBackend = Box<dyn WootilityBackend>;

// Lets tests keep a handle on a backend after giving it to a client.
impl<T: WootilityBackend + ?Sized> WootilityBackend for Arc<T> {
    fn switch_profile(&self, serial: &str, profile_index: usize) -> Result<()> {
        (**self).switch_profile(serial, profile_index)
    }

    fn apply_rgb_effect(&self, serial: &str, effect_id: &str) -> Result<()> {
        (**self).apply_rgb_effect(serial, effect_id)
    }
}
