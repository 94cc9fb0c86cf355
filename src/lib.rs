//! Wooting CLI library - profile and RGB control for Wooting keyboards via Wootility.
//!
//! This library exposes the core functionality of the `woot` CLI for use in tests
//! and potentially other applications.
//!
//! # Modules
//!
//! - `client`: The Wootility client (device data, profiles, actions)
//! - `device`: Device/profile types and the backend port
//! - `batch`: Multi-device profile switches and RGB effects
//! - `config`: Install detection, device config and preferences
//! - `rgb`: RGB effect catalog
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
#![forbid(unsafe_code)]

pub mod batch;
pub mod cli;
pub mod client;
pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod output;
pub mod rgb;
pub mod theme;
