//! Recording backend for unit and integration testing.
//!
//! `MockBackend` stands in for a running Wootility. It records every
//! request and can be told to fail for particular devices.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use woot::device::mock::{MockBackend, Operation};
//!
//! let mock = Arc::new(MockBackend::new().failing_serial("WK002"));
//! let client = WootilityClient::with_backend(config, Box::new(Arc::clone(&mock)));
//!
//! client.switch_profile("WK001", 1);
//! mock.assert_operations(&[Operation::SwitchProfile {
//!     serial: "WK001".to_string(),
//!     profile_index: 1,
//! }]);
//! ```

use std::sync::Mutex;

use tracing::{debug, trace};

use super::WootilityBackend;
use crate::error::{Result, WootError};

/// Recorded request for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    SwitchProfile { serial: String, profile_index: usize },
    ApplyRgbEffect { serial: String, effect_id: String },
}

impl Operation {
    fn serial(&self) -> &str {
        match self {
            Self::SwitchProfile { serial, .. } | Self::ApplyRgbEffect { serial, .. } => serial,
        }
    }
}

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Fail every request after N have succeeded.
    pub fail_after_ops: Option<usize>,
    /// Serials whose requests always fail.
    pub failing_serials: Vec<String>,
}

/// Backend that records requests instead of talking to Wootility.
///
/// Failed requests are recorded too, so assertions see every attempt.
#[derive(Debug, Default)]
pub struct MockBackend {
    config: MockConfig,
    operation_log: Mutex<Vec<Operation>>,
    error_injection: Mutex<Option<WootError>>,
    success_count: Mutex<usize>,
}

impl MockBackend {
    /// Create a backend that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        debug!("Creating mock backend");
        Self::default()
    }

    /// Configure mock behavior.
    #[must_use]
    pub fn with_config(mut self, config: MockConfig) -> Self {
        self.config = config;
        self
    }

    /// Make every request for `serial` fail.
    #[must_use]
    pub fn failing_serial(mut self, serial: &str) -> Self {
        self.config.failing_serials.push(serial.to_string());
        self
    }

    /// Inject an error for the next request.
    pub fn inject_error(&self, error: WootError) {
        *self.error_injection.lock().unwrap() = Some(error);
    }

    /// Clear injected error.
    pub fn clear_error(&self) {
        *self.error_injection.lock().unwrap() = None;
    }

    // === Assertions ===

    /// Get all recorded requests.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        self.operation_log.lock().unwrap().clone()
    }

    /// Get the number of requests received.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.operation_log.lock().unwrap().len()
    }

    /// Serials that received at least one request, in first-seen order.
    #[must_use]
    pub fn touched_serials(&self) -> Vec<String> {
        let mut serials: Vec<String> = Vec::new();
        for op in self.operations() {
            if !serials.iter().any(|s| s == op.serial()) {
                serials.push(op.serial().to_string());
            }
        }
        serials
    }

    /// Assert specific requests were received.
    ///
    /// # Panics
    ///
    /// Panics if the requests don't match.
    pub fn assert_operations(&self, expected: &[Operation]) {
        let actual = self.operations();
        assert_eq!(
            actual, expected,
            "Operation mismatch.\nExpected: {expected:#?}\nActual: {actual:#?}",
        );
    }

    /// Assert no requests were received.
    ///
    /// # Panics
    ///
    /// Panics if any requests were recorded.
    pub fn assert_no_operations(&self) {
        let ops = self.operations();
        assert!(
            ops.is_empty(),
            "Expected no operations, but found: {ops:#?}",
        );
    }

    /// Assert a specific request was received at least once.
    ///
    /// # Panics
    ///
    /// Panics if the request was not found.
    pub fn assert_contains(&self, expected: &Operation) {
        let ops = self.operations();
        assert!(
            ops.contains(expected),
            "Expected operation {expected:?} not found in: {ops:#?}",
        );
    }

    /// Clear the request log for fresh assertions.
    pub fn clear_operations(&self) {
        self.operation_log.lock().unwrap().clear();
        *self.success_count.lock().unwrap() = 0;
    }

    // === Internal Helpers ===

    fn handle(&self, op: Operation) -> Result<()> {
        trace!(?op, "Recording operation");
        let serial = op.serial().to_string();
        self.operation_log.lock().unwrap().push(op);

        if let Some(error) = self.error_injection.lock().unwrap().take() {
            return Err(error);
        }

        if self.config.failing_serials.contains(&serial) {
            return Err(WootError::Backend(format!(
                "Mock device {serial} configured to fail"
            )));
        }

        let mut successes = self.success_count.lock().unwrap();
        if let Some(limit) = self.config.fail_after_ops {
            if *successes >= limit {
                return Err(WootError::Backend(
                    "Mock failure after ops limit".to_string(),
                ));
            }
        }
        *successes += 1;
        Ok(())
    }
}

impl WootilityBackend for MockBackend {
    fn switch_profile(&self, serial: &str, profile_index: usize) -> Result<()> {
        self.handle(Operation::SwitchProfile {
            serial: serial.to_string(),
            profile_index,
        })
    }

    fn apply_rgb_effect(&self, serial: &str, effect_id: &str) -> Result<()> {
        self.handle(Operation::ApplyRgbEffect {
            serial: serial.to_string(),
            effect_id: effect_id.to_string(),
        })
    }
}
