// crates/fact-suite/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for fact-suite integration tests.
// ============================================================================
//! ## Overview
//! Result-based assertion helpers and an error-substring matcher for
//! fail-closed configuration paths.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::error::Error;
use std::fmt;
use std::fmt::Debug;

use fact_suite::ConfigError;

/// Standard result type used across fact-suite integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(TestError {
            message: message.into(),
        }))
    }
}

/// Returns an error describing both values when they differ.
///
/// # Errors
/// Returns a `TestError` when `actual != expected`.
pub fn ensure_eq<T>(actual: &T, expected: &T, context: &str) -> TestResult
where
    T: PartialEq + Debug + ?Sized,
{
    ensure(actual == expected, format!("{context}: expected {expected:?}, got {actual:?}"))
}

/// Passes when `result` failed with a message containing `needle`.
///
/// # Errors
/// Returns a `TestError` when `result` succeeded or the message differs.
pub fn assert_invalid<T: Debug>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            ensure(message.contains(needle), format!("error {message} did not contain {needle}"))
        }
        Ok(value) => ensure(false, format!("expected invalid config, got {value:?}")),
    }
}
