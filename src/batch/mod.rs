//! Multi-device operations.
//!
//! Profile switches and RGB effects are applied to every eligible device in
//! turn. A failure on one device never stops the rest; the per-device
//! results are folded into a three-way outcome.

mod runner;

pub use runner::{
    BatchAction, BatchOutcome, BatchReport, BatchSummary, DeviceResult, DeviceStatus,
    apply_effect_all, apply_effect_all_with, switch_all, switch_all_with,
};
