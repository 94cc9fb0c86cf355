//! Device and profile types for Wooting keyboards.

use serde::Serialize;

/// Model name used when the config file does not carry one.
pub const UNKNOWN_MODEL: &str = "Unknown Wooting Device";

/// Profile slots assumed when the config file does not list any.
pub const DEFAULT_PROFILE_NAMES: [&str; 4] = ["Default", "Gaming", "Typing", "Custom"];

/// A Wooting keyboard as reported by Wootility (or the sample set).
///
/// Built fresh on every query. Switching a profile does not mutate an
/// existing value; re-query to observe the new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// Device serial number
    pub serial: String,
    /// Human-readable model name
    pub model_name: String,
    /// Whether the device is currently connected
    pub connected: bool,
    /// Profile slot names, in slot order
    pub profiles: Vec<String>,
    /// Index of the active profile (0-based)
    pub current_profile: usize,
    /// Whether the device supports RGB lighting
    pub rgb_enabled: bool,
}

impl Device {
    /// Name of the active profile, if the index points at one.
    pub fn current_profile_name(&self) -> Option<&str> {
        self.profiles.get(self.current_profile).map(String::as_str)
    }

    /// Whether the device has a slot at `index`.
    pub fn has_profile(&self, index: usize) -> bool {
        index < self.profiles.len()
    }

    /// Derive the profile list, marking `current` as active.
    pub fn profiles_with_active(&self, current: usize) -> Vec<Profile> {
        self.profiles
            .iter()
            .enumerate()
            .map(|(index, name)| Profile {
                id: format!("{}-{index}", self.serial),
                name: name.clone(),
                active: index == current,
                device_serial: self.serial.clone(),
                profile_index: index,
                description: profile_description(name, index),
            })
            .collect()
    }
}

/// A profile slot on a device. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// `<serial>-<index>`
    pub id: String,
    pub name: String,
    pub active: bool,
    /// Serial of the owning device
    pub device_serial: String,
    pub profile_index: usize,
    pub description: String,
}

impl Profile {
    /// 1-based profile number as shown to users.
    pub const fn number(&self) -> usize {
        self.profile_index + 1
    }
}

/// Describe a profile by name, falling back to its slot position.
///
/// Lookup is case-insensitive.
pub fn profile_description(name: &str, index: usize) -> String {
    let known = match name.to_lowercase().as_str() {
        "default" => Some("Standard keyboard configuration"),
        "gaming" => Some("Optimized for gaming with low latency"),
        "typing" => Some("Comfortable for extended typing sessions"),
        "custom" => Some("User-customized profile"),
        "work" => Some("Professional work environment settings"),
        "streaming" => Some("Optimized for content creation"),
        "rgb show" => Some("Spectacular RGB lighting effects"),
        _ => None,
    };
    known.map_or_else(
        || format!("Profile {} configuration", index + 1),
        str::to_string,
    )
}

/// The fixed sample devices used when no Wootility data is available.
pub fn sample_devices() -> Vec<Device> {
    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    vec![
        Device {
            serial: "WK001".to_string(),
            model_name: "Wooting One".to_string(),
            connected: true,
            profiles: names(&DEFAULT_PROFILE_NAMES),
            current_profile: 0,
            rgb_enabled: true,
        },
        Device {
            serial: "WK002".to_string(),
            model_name: "Wooting Two HE".to_string(),
            connected: true,
            profiles: names(&["Work", "Gaming", "Streaming", "RGB Show"]),
            current_profile: 1,
            rgb_enabled: true,
        },
    ]
}
