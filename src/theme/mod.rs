//! Theme system for human-mode output.

use console::Style;

/// Visual theme for Wootility CLI human-mode output.
///
/// Centralizes colors and styles for consistent rendering.
pub struct WootTheme {
    // Brand colors
    pub accent: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub muted: Style,

    // Component styles
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub device_serial: Style,
    pub active_profile: Style,
    pub inactive_profile: Style,
    pub category: Style,
}

impl Default for WootTheme {
    fn default() -> Self {
        Self {
            accent: Style::new().color256(33),
            success: Style::new().green(),
            error: Style::new().red(),
            warning: Style::new().color256(214),
            muted: Style::new().color256(244),
            header: Style::new().bold().color256(33),
            label: Style::new().dim(),
            value: Style::new().bold(),
            device_serial: Style::new().italic().color256(244),
            active_profile: Style::new().bold().green(),
            inactive_profile: Style::new(),
            category: Style::new().color256(141),
        }
    }
}
