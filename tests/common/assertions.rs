//! Custom assertion helpers for tests.
#![allow(dead_code)]

use tracing::error;

pub fn assert_no_ansi(output: &str) {
    if output.contains("\u{1b}[") {
        error!("ANSI escape sequence detected");
        panic!("Expected no ANSI escape sequences in:\n{output}");
    }
}

/// Every robot-mode error document carries the same four fields.
pub fn assert_error_shape(json: &serde_json::Value) {
    for field in ["error", "message", "suggestion", "recoverable"] {
        if json.get(field).is_none() {
            error!(field, json = %json, "Missing expected JSON field");
            panic!("Missing JSON field: {field}");
        }
    }
    assert_eq!(json["error"], true);
}

/// Profile ids are `<serial>-<index>`.
pub fn assert_profile_id(id: &str, serial: &str) {
    let re = regex::Regex::new(r"^(?P<serial>.+)-(?P<index>\d+)$").expect("valid regex");
    let caps = re
        .captures(id)
        .unwrap_or_else(|| panic!("profile id {id:?} is not <serial>-<index>"));
    assert_eq!(&caps["serial"], serial);
}
