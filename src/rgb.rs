//! RGB lighting effect catalog.
//!
//! The catalog is static and not device-specific. Applying an effect is a
//! per-device request keyed by `(serial, effect id)`.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Broad grouping of lighting effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EffectCategory {
    /// Solid single color
    Static,
    /// Animated without input
    Dynamic,
    /// Responds to key presses
    Reactive,
    /// Lighting disabled
    Off,
}

impl EffectCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Reactive => "reactive",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RgbEffect {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: EffectCategory,
}

const CATALOG: [RgbEffect; 7] = [
    RgbEffect {
        id: "rainbow-wave",
        name: "Rainbow Wave",
        description: "Smooth rainbow wave across the keyboard",
        category: EffectCategory::Dynamic,
    },
    RgbEffect {
        id: "breathing",
        name: "Breathing",
        description: "Gentle breathing effect with smooth transitions",
        category: EffectCategory::Dynamic,
    },
    RgbEffect {
        id: "reactive",
        name: "Reactive",
        description: "Keys light up when pressed",
        category: EffectCategory::Reactive,
    },
    RgbEffect {
        id: "static-red",
        name: "Static Red",
        description: "Solid red lighting",
        category: EffectCategory::Static,
    },
    RgbEffect {
        id: "static-blue",
        name: "Static Blue",
        description: "Solid blue lighting",
        category: EffectCategory::Static,
    },
    RgbEffect {
        id: "static-white",
        name: "Static White",
        description: "Solid white lighting",
        category: EffectCategory::Static,
    },
    RgbEffect {
        id: "off",
        name: "Turn Off",
        description: "Disable RGB lighting",
        category: EffectCategory::Off,
    },
];

/// All known effects, in display order.
pub fn catalog() -> Vec<RgbEffect> {
    CATALOG.to_vec()
}

/// Look up an effect by id (exact match).
pub fn find_effect(id: &str) -> Option<RgbEffect> {
    CATALOG.iter().find(|effect| effect.id == id).cloned()
}
